use crate::infra::InMemoryDashboard;
use brokerboard::dashboard::{BrokerId, DashboardService};
use brokerboard::error::AppError;
use brokerboard::roster::RosterImporter;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Spotlight a specific broker id (defaults to the leaderboard leader).
    #[arg(long)]
    pub(crate) broker: Option<u32>,
    /// Seed the demo store from a roster CSV instead of the built-in samples.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { broker, roster } = args;

    let store = match roster {
        Some(path) => {
            let entries = RosterImporter::from_path(&path)?;
            println!(
                "Roster loaded: {} brokers from {}",
                entries.len(),
                path.display()
            );
            InMemoryDashboard::from_roster(entries)
        }
        None => InMemoryDashboard::with_sample_data(),
    };
    let service = DashboardService::new(Arc::new(store));

    println!("Broker performance board demo");

    let rankings = match service.rankings() {
        Ok(rows) => rows,
        Err(err) => {
            println!("  Leaderboard unavailable: {}", err);
            return Ok(());
        }
    };

    if rankings.is_empty() {
        println!("\nLeaderboard: no active brokers with recorded points");
        return Ok(());
    }

    println!("\nLeaderboard");
    for row in &rankings {
        let attention = if row.needs_attention {
            " [attention]"
        } else {
            ""
        };
        println!(
            "- #{} {} | {} pts | 1h: {} | propostas: {} | vendas: {}{}",
            row.position,
            row.nome,
            row.pontos,
            row.leads_respondidos_1h,
            row.propostas_enviadas,
            row.vendas_realizadas,
            attention
        );
    }

    let spotlight = broker.map(BrokerId).unwrap_or(rankings[0].broker_id);
    let report = match service.points_report(spotlight) {
        Ok(report) => report,
        Err(err) => {
            println!("  Points report unavailable: {}", err);
            return Ok(());
        }
    };

    println!("\nPoints report: {} ({} pts on the board)", report.nome, report.pontos);
    for entry in &report.breakdown.entries {
        println!(
            "- {} x{} -> {:+}",
            entry.category_label, entry.count, entry.points
        );
    }
    println!(
        "Earned {} | lost {} | balance {:+}",
        report.breakdown.total_positive, report.breakdown.total_negative, report.breakdown.balance
    );

    match service.alerts(spotlight) {
        Ok(alerts) if alerts.is_empty() => println!("\nAlerts: none"),
        Ok(alerts) => {
            println!("\nAlerts");
            for alert in &alerts {
                println!(
                    "- [{}] {} ({} leads)",
                    alert.severity.label(),
                    alert.message,
                    alert.count
                );
            }
        }
        Err(err) => println!("\nAlerts unavailable: {}", err),
    }

    match service.funnel(spotlight) {
        Ok(stages) => {
            println!("\nConversion funnel");
            for stage in &stages {
                println!("- {}: {}", stage.stage_label, stage.value);
            }
        }
        Err(err) => println!("\nConversion funnel unavailable: {}", err),
    }

    match service.dashboard_metrics() {
        Ok(metrics) => {
            println!("\nAgency totals");
            println!("- {} leads held by active brokers", metrics.total_leads);
            println!("- {} ranked brokers active", metrics.active_brokers);
            println!("- {} average points", metrics.average_points);
            println!("- {} sales completed", metrics.total_sales);
        }
        Err(err) => println!("\nAgency totals unavailable: {}", err),
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\nPoints payload:\n{}", json),
        Err(err) => println!("\nPoints payload unavailable: {}", err),
    }

    Ok(())
}
