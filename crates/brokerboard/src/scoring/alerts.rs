use serde::{Deserialize, Serialize};

use super::counters::BrokerPointCounters;

/// Severity ladder for derived alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Threshold rules that raise attention flags, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    LeadsWithoutInteraction,
    LeadsAnsweredLate,
    LeadsStuckInStage,
}

impl AlertRule {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::LeadsWithoutInteraction,
            Self::LeadsAnsweredLate,
            Self::LeadsStuckInStage,
        ]
    }

    pub const fn severity(self) -> AlertSeverity {
        match self {
            Self::LeadsWithoutInteraction | Self::LeadsAnsweredLate => AlertSeverity::Warning,
            Self::LeadsStuckInStage => AlertSeverity::Critical,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::LeadsWithoutInteraction => "Leads with no interaction for over 24h",
            Self::LeadsAnsweredLate => "Leads answered after 18:00",
            Self::LeadsStuckInStage => "Leads with no stage change for 5+ days",
        }
    }

    fn source_count(self, counters: &BrokerPointCounters) -> u32 {
        match self {
            Self::LeadsWithoutInteraction => counters.leads_sem_interacao_24h,
            Self::LeadsAnsweredLate => counters.leads_respondidos_apos_18h,
            Self::LeadsStuckInStage => counters.leads_5_dias_sem_mudanca,
        }
    }
}

/// Threshold notice produced by one alert rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertEntry {
    pub rule: AlertRule,
    pub severity: AlertSeverity,
    pub message: &'static str,
    pub count: u32,
}

/// Evaluates every alert rule against a counter row, keeping rule order.
///
/// Rules with a zero counter produce no entry, so an uneventful row yields an
/// empty list rather than a list of zero-count alerts.
pub fn derive_alerts(counters: &BrokerPointCounters) -> Vec<AlertEntry> {
    AlertRule::ordered()
        .into_iter()
        .filter_map(|rule| {
            let count = rule.source_count(counters);
            (count > 0).then(|| AlertEntry {
                rule,
                severity: rule.severity(),
                message: rule.message(),
                count,
            })
        })
        .collect()
}

/// True when any alert rule would fire for this counter row.
pub fn needs_attention(counters: &BrokerPointCounters) -> bool {
    AlertRule::ordered()
        .into_iter()
        .any(|rule| rule.source_count(counters) > 0)
}
