use serde::{Deserialize, Serialize};

use super::counters::BrokerPointCounters;

/// Conversion funnel stages in ladder order, each with a fixed display color.
///
/// The funnel reports raw counters. Stage values intentionally ignore the
/// point multipliers so the chart reflects activity volume, not score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    RespondedWithinHour,
    Visited,
    ProposalsSent,
    SalesCompleted,
}

impl FunnelStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::RespondedWithinHour,
            Self::Visited,
            Self::ProposalsSent,
            Self::SalesCompleted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RespondedWithinHour => "Leads responded within 1 hour",
            Self::Visited => "Leads visited",
            Self::ProposalsSent => "Proposals sent",
            Self::SalesCompleted => "Sales completed",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::RespondedWithinHour => "#6366F1",
            Self::Visited => "#22C55E",
            Self::ProposalsSent => "#F59E0B",
            Self::SalesCompleted => "#94A3B8",
        }
    }

    fn source_count(self, counters: &BrokerPointCounters) -> u32 {
        match self {
            Self::RespondedWithinHour => counters.leads_respondidos_1h,
            Self::Visited => counters.leads_visitados,
            Self::ProposalsSent => counters.propostas_enviadas,
            Self::SalesCompleted => counters.vendas_realizadas,
        }
    }
}

/// One funnel stage with its raw activity volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunnelStageEntry {
    pub stage: FunnelStage,
    pub stage_label: &'static str,
    pub value: u32,
    pub color: &'static str,
}

/// Builds the four-stage funnel for a counter row.
///
/// Every stage is present even at zero volume, so charts keep their shape.
pub fn conversion_funnel(counters: &BrokerPointCounters) -> Vec<FunnelStageEntry> {
    FunnelStage::ordered()
        .into_iter()
        .map(|stage| FunnelStageEntry {
            stage,
            stage_label: stage.label(),
            value: stage.source_count(counters),
            color: stage.color(),
        })
        .collect()
}
