use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Datelike;

use super::domain::{ActivityRecord, BrokerId, BrokerProfile, BrokerScore, LeadRecord};
use super::heatmap::{activity_heatmap, HeatmapRow};
use super::repository::{DashboardRepository, RepositoryError};
use super::views::{
    DashboardMetricsView, MonthlySalesEntry, PerformanceView, PointsReportView, RankPositionView,
    RankingRowView, StageShareEntry,
};
use crate::scoring::{
    conversion_funnel, derive_alerts, needs_attention, points_breakdown, AlertEntry,
    FunnelStageEntry, PointCategory,
};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Error raised by dashboard queries.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("broker {0} not found")]
    BrokerNotFound(u32),
    #[error("broker {0} is inactive")]
    BrokerInactive(u32),
    #[error("no score row recorded for broker {0}")]
    ScoreNotFound(u32),
    #[error("broker {0} is not on the leaderboard")]
    NotRanked(u32),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Read-model facade over the store.
///
/// Every query re-derives its view from the rows the repository returns, so
/// two calls against unchanged rows produce identical payloads.
pub struct DashboardService<R> {
    repository: Arc<R>,
}

impl<R> DashboardService<R>
where
    R: DashboardRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Leaderboard of active brokers, highest score first.
    ///
    /// Brokers tied on points keep the order the store returned them in.
    pub fn rankings(&self) -> Result<Vec<RankingRowView>, DashboardError> {
        let brokers = self.repository.list_brokers()?;
        let profiles: HashMap<BrokerId, &BrokerProfile> =
            brokers.iter().map(|profile| (profile.id, profile)).collect();

        let mut scores: Vec<BrokerScore> = self
            .repository
            .scores()?
            .into_iter()
            .filter(|score| {
                profiles
                    .get(&score.broker_id)
                    .map_or(false, |profile| profile.active)
            })
            .collect();
        scores.sort_by(|a, b| b.pontos.cmp(&a.pontos));

        let rows = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| {
                let foto_url = profiles
                    .get(&score.broker_id)
                    .and_then(|profile| profile.foto_url.clone());
                RankingRowView {
                    position: index + 1,
                    broker_id: score.broker_id,
                    nome: score.nome,
                    foto_url,
                    pontos: score.pontos,
                    leads_respondidos_1h: score.counters.leads_respondidos_1h,
                    propostas_enviadas: score.counters.propostas_enviadas,
                    vendas_realizadas: score.counters.vendas_realizadas,
                    needs_attention: needs_attention(&score.counters),
                }
            })
            .collect();
        Ok(rows)
    }

    /// 1-based leaderboard slot for one broker.
    ///
    /// Brokers absent from the leaderboard (inactive, or no score row) get an
    /// error instead of a made-up position.
    pub fn rank_position(&self, id: BrokerId) -> Result<RankPositionView, DashboardError> {
        self.rankings()?
            .into_iter()
            .find(|row| row.broker_id == id)
            .map(|row| RankPositionView {
                position: row.position,
            })
            .ok_or(DashboardError::NotRanked(id.0))
    }

    /// Directory profile, gated on the broker being active.
    pub fn broker_detail(&self, id: BrokerId) -> Result<BrokerProfile, DashboardError> {
        let profile = self
            .repository
            .broker(id)?
            .ok_or(DashboardError::BrokerNotFound(id.0))?;
        if !profile.active {
            return Err(DashboardError::BrokerInactive(id.0));
        }
        Ok(profile)
    }

    /// Stored score total plus the derived per-category breakdown.
    ///
    /// A broker without a score row is an error here; an all-zero row is a
    /// valid report with an empty breakdown.
    pub fn points_report(&self, id: BrokerId) -> Result<PointsReportView, DashboardError> {
        let score = self
            .repository
            .score_for(id)?
            .ok_or(DashboardError::ScoreNotFound(id.0))?;
        Ok(PointsReportView {
            broker_id: score.broker_id,
            nome: score.nome,
            pontos: score.pontos,
            breakdown: points_breakdown(&score.counters),
        })
    }

    /// Alerts fired by the broker's counters; no score row means no alerts.
    pub fn alerts(&self, id: BrokerId) -> Result<Vec<AlertEntry>, DashboardError> {
        match self.repository.score_for(id)? {
            Some(score) => Ok(derive_alerts(&score.counters)),
            None => Ok(Vec::new()),
        }
    }

    /// Four-stage conversion funnel over the broker's raw counters.
    pub fn funnel(&self, id: BrokerId) -> Result<Vec<FunnelStageEntry>, DashboardError> {
        let score = self
            .repository
            .score_for(id)?
            .ok_or(DashboardError::ScoreNotFound(id.0))?;
        Ok(conversion_funnel(&score.counters))
    }

    pub fn leads(&self, id: BrokerId) -> Result<Vec<LeadRecord>, DashboardError> {
        Ok(self.repository.leads_for(id)?)
    }

    pub fn activities(&self, id: BrokerId) -> Result<Vec<ActivityRecord>, DashboardError> {
        Ok(self.repository.activities_for(id)?)
    }

    /// Weekday/hour grid of sent messages for the broker.
    pub fn heatmap(&self, id: BrokerId) -> Result<Vec<HeatmapRow>, DashboardError> {
        let activities = self.repository.activities_for(id)?;
        Ok(activity_heatmap(&activities))
    }

    /// Monthly closed-sales series and pipeline stage distribution.
    pub fn performance(&self, id: BrokerId) -> Result<PerformanceView, DashboardError> {
        let leads = self.repository.leads_for(id)?;
        Ok(PerformanceView {
            monthly: monthly_sales(&leads),
            stages: stage_distribution(&leads),
        })
    }

    /// Agency-wide headline figures across active brokers.
    pub fn dashboard_metrics(&self) -> Result<DashboardMetricsView, DashboardError> {
        let brokers = self.repository.list_brokers()?;
        let profiles: HashMap<BrokerId, &BrokerProfile> =
            brokers.iter().map(|profile| (profile.id, profile)).collect();

        let mut total_leads = 0;
        for profile in brokers.iter().filter(|profile| profile.active) {
            total_leads += self.repository.leads_for(profile.id)?.len();
        }

        let scores = self.repository.scores()?;
        let ranked: Vec<&BrokerScore> = scores
            .iter()
            .filter(|score| {
                profiles
                    .get(&score.broker_id)
                    .map_or(false, |profile| profile.active)
            })
            .collect();

        let average_points = if ranked.is_empty() {
            0
        } else {
            let total: i64 = ranked.iter().map(|score| score.pontos).sum();
            (total as f64 / ranked.len() as f64).round() as i64
        };
        let total_sales = ranked
            .iter()
            .map(|score| u64::from(score.counters.vendas_realizadas))
            .sum();

        Ok(DashboardMetricsView {
            total_leads,
            active_brokers: brokers
                .iter()
                .filter(|profile| profile.active && profile.cargo.is_ranked())
                .count(),
            average_points,
            total_sales,
        })
    }
}

fn monthly_sales(leads: &[LeadRecord]) -> Vec<MonthlySalesEntry> {
    let mut months: BTreeMap<(i32, u32), (f64, u32)> = BTreeMap::new();
    for lead in leads.iter().filter(|lead| lead.fechado) {
        let slot = months
            .entry((lead.atualizado_em.year(), lead.atualizado_em.month()))
            .or_insert((0.0, 0));
        slot.0 += lead.valor;
        slot.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (sales_amount, properties_sold))| MonthlySalesEntry {
            year,
            month: MONTH_LABELS[(month - 1) as usize],
            sales_amount,
            properties_sold,
            points: i64::from(properties_sold) * PointCategory::SalesCompleted.points_per_unit(),
        })
        .collect()
}

fn stage_distribution(leads: &[LeadRecord]) -> Vec<StageShareEntry> {
    let mut stages: Vec<(String, u32)> = Vec::new();
    for lead in leads {
        match stages.iter_mut().find(|(etapa, _)| etapa == &lead.etapa) {
            Some((_, count)) => *count += 1,
            None => stages.push((lead.etapa.clone(), 1)),
        }
    }

    let total: u32 = stages.iter().map(|(_, count)| count).sum();
    // Stable sort keeps first-seen order for stages tied on count.
    stages.sort_by(|a, b| b.1.cmp(&a.1));
    stages
        .into_iter()
        .map(|(etapa, count)| StageShareEntry {
            etapa,
            count,
            percentage: stage_percentage(count, total),
        })
        .collect()
}

fn stage_percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) * 100.0 / f64::from(total)).round() as u32
}
