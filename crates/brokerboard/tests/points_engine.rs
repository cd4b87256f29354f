//! Behavioral specifications for the points, alert, and funnel rule tables,
//! exercised through the public scoring API exactly as consumers see it.

use brokerboard::scoring::{
    conversion_funnel, derive_alerts, needs_attention, points_breakdown, AlertRule, AlertSeverity,
    BrokerPointCounters, FunnelStage, PointCategory, PointSign,
};

fn sample_counters() -> BrokerPointCounters {
    BrokerPointCounters {
        leads_respondidos_1h: 3,
        leads_visitados: 2,
        propostas_enviadas: 1,
        vendas_realizadas: 0,
        leads_perdidos: 4,
        ..BrokerPointCounters::default()
    }
}

fn saturated_counters() -> BrokerPointCounters {
    BrokerPointCounters {
        leads_respondidos_1h: 1,
        leads_visitados: 1,
        propostas_enviadas: 1,
        vendas_realizadas: 1,
        leads_atualizados_mesmo_dia: 1,
        feedbacks_positivos: 1,
        resposta_rapida_3h: 1,
        todos_leads_respondidos: 1,
        cadastro_completo: 1,
        acompanhamento_pos_venda: 1,
        leads_perdidos: 1,
        leads_sem_interacao_24h: 1,
        leads_respondidos_apos_18h: 1,
        leads_5_dias_sem_mudanca: 1,
        leads_ignorados_48h: 1,
        leads_tempo_resposta_acima_12h: 1,
    }
}

#[test]
fn zero_counters_produce_an_empty_breakdown() {
    let summary = points_breakdown(&BrokerPointCounters::default());

    assert!(summary.entries.is_empty());
    assert_eq!(summary.total_positive, 0);
    assert_eq!(summary.total_negative, 0);
    assert_eq!(summary.balance, 0);
}

#[test]
fn breakdown_totals_obey_the_balance_identity() {
    let summary = points_breakdown(&sample_counters());

    assert!(summary.total_negative >= 0);
    assert_eq!(
        summary.balance,
        summary.total_positive - summary.total_negative
    );
}

#[test]
fn categories_appear_exactly_when_counted() {
    let counters = BrokerPointCounters {
        feedbacks_positivos: 2,
        acompanhamento_pos_venda: 1,
        ..BrokerPointCounters::default()
    };

    let summary = points_breakdown(&counters);
    let categories: Vec<PointCategory> =
        summary.entries.iter().map(|entry| entry.category).collect();

    assert_eq!(
        categories,
        vec![
            PointCategory::PositiveFeedback,
            PointCategory::PostSaleFollowUp,
        ],
    );
}

#[test]
fn sample_row_matches_the_published_table() {
    let summary = points_breakdown(&sample_counters());

    let points: Vec<i64> = summary.entries.iter().map(|entry| entry.points).collect();
    assert_eq!(points, vec![6, 10, 8, -4]);
    assert_eq!(summary.entries[3].sign, PointSign::Negative);
    assert_eq!(summary.total_positive, 24);
    assert_eq!(summary.total_negative, 4);
    assert_eq!(summary.balance, 20);
}

#[test]
fn every_category_scores_its_tabled_value() {
    let summary = points_breakdown(&saturated_counters());

    assert_eq!(summary.entries.len(), 11);
    let expected: [(PointCategory, &str, i64); 11] = [
        (
            PointCategory::LeadsRespondedWithinHour,
            "Leads responded within 1 hour",
            2,
        ),
        (PointCategory::LeadsVisited, "Leads visited", 5),
        (PointCategory::ProposalsSent, "Proposals sent", 8),
        (PointCategory::SalesCompleted, "Sales completed", 15),
        (
            PointCategory::LeadsUpdatedSameDay,
            "Leads updated same day",
            2,
        ),
        (PointCategory::PositiveFeedback, "Positive feedback", 3),
        (PointCategory::FastResponse, "Fast response (within 3h)", 4),
        (PointCategory::AllLeadsResponded, "All leads responded", 5),
        (
            PointCategory::CompleteRegistration,
            "Complete registration",
            3,
        ),
        (PointCategory::PostSaleFollowUp, "Post-sale follow-up", 10),
        (PointCategory::LeadsLost, "Leads lost", -1),
    ];
    for (entry, (category, label, points)) in summary.entries.iter().zip(expected) {
        assert_eq!(entry.category, category);
        assert_eq!(entry.category_label, label);
        assert_eq!(entry.count, 1);
        assert_eq!(entry.points, points);
    }
    assert_eq!(summary.total_positive, 57);
    assert_eq!(summary.total_negative, 1);
    assert_eq!(summary.balance, 56);
}

#[test]
fn key_order_of_the_source_row_is_irrelevant() {
    let shuffled: BrokerPointCounters = serde_json::from_str(
        r#"{"leads_perdidos":4,"propostas_enviadas":1,"leads_respondidos_1h":3,"leads_visitados":2}"#,
    )
    .expect("counters parse");

    assert_eq!(shuffled, sample_counters());
    assert_eq!(points_breakdown(&shuffled), points_breakdown(&sample_counters()));
}

#[test]
fn unscored_columns_are_accepted_and_ignored() {
    let counters = BrokerPointCounters {
        leads_ignorados_48h: 7,
        leads_tempo_resposta_acima_12h: 9,
        ..BrokerPointCounters::default()
    };

    assert!(points_breakdown(&counters).entries.is_empty());
    assert!(derive_alerts(&counters).is_empty());
    assert!(!needs_attention(&counters));
}

#[test]
fn derivations_are_idempotent() {
    let counters = sample_counters();

    let first = points_breakdown(&counters);
    let second = points_breakdown(&counters);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize first"),
        serde_json::to_string(&second).expect("serialize second"),
    );
    assert_eq!(derive_alerts(&counters), derive_alerts(&counters));
    assert_eq!(conversion_funnel(&counters), conversion_funnel(&counters));
}

#[test]
fn alert_sample_row_fires_warning_then_critical() {
    let counters = BrokerPointCounters {
        leads_sem_interacao_24h: 5,
        leads_respondidos_apos_18h: 0,
        leads_5_dias_sem_mudanca: 2,
        ..BrokerPointCounters::default()
    };

    let alerts = derive_alerts(&counters);

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].rule, AlertRule::LeadsWithoutInteraction);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    assert_eq!(alerts[0].message, "Leads with no interaction for over 24h");
    assert_eq!(alerts[0].count, 5);
    assert_eq!(alerts[1].rule, AlertRule::LeadsStuckInStage);
    assert_eq!(alerts[1].severity, AlertSeverity::Critical);
    assert_eq!(alerts[1].count, 2);
    assert!(needs_attention(&counters));
}

#[test]
fn quiet_rows_raise_no_alerts() {
    let counters = BrokerPointCounters::default();

    assert!(derive_alerts(&counters).is_empty());
    assert!(!needs_attention(&counters));
}

#[test]
fn every_alert_rule_keeps_its_severity_and_message() {
    let alerts = derive_alerts(&saturated_counters());

    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    assert_eq!(alerts[1].severity, AlertSeverity::Warning);
    assert_eq!(alerts[1].message, "Leads answered after 18:00");
    assert_eq!(alerts[2].severity, AlertSeverity::Critical);
    assert_eq!(alerts[2].message, "Leads with no stage change for 5+ days");
}

#[test]
fn funnel_keeps_all_stages_at_raw_volume() {
    let stages = conversion_funnel(&sample_counters());

    assert_eq!(stages.len(), 4);
    assert_eq!(stages[0].stage, FunnelStage::RespondedWithinHour);
    assert_eq!(stages[0].value, 3);
    assert_eq!(stages[1].value, 2);
    assert_eq!(stages[2].value, 1);
    // Empty stages stay in the ladder at zero volume.
    assert_eq!(stages[3].stage, FunnelStage::SalesCompleted);
    assert_eq!(stages[3].value, 0);
}

#[test]
fn funnel_values_ignore_the_point_multipliers() {
    let counters = BrokerPointCounters {
        vendas_realizadas: 3,
        ..BrokerPointCounters::default()
    };

    let stages = conversion_funnel(&counters);

    // 3 sales stay 3, not the 45 points they would score.
    assert_eq!(stages[3].value, 3);
}

#[test]
fn funnel_colors_are_fixed_per_stage() {
    let colors: Vec<&str> = conversion_funnel(&BrokerPointCounters::default())
        .iter()
        .map(|stage| stage.color)
        .collect();

    assert_eq!(colors, vec!["#6366F1", "#22C55E", "#F59E0B", "#94A3B8"]);
}
