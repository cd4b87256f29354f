use serde::{Deserialize, Serialize};

use super::counters::BrokerPointCounters;

/// Contribution direction of a scored category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSign {
    Positive,
    Negative,
}

impl PointSign {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

/// Scored activity categories, listed in the order the breakdown reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    LeadsRespondedWithinHour,
    LeadsVisited,
    ProposalsSent,
    SalesCompleted,
    LeadsUpdatedSameDay,
    PositiveFeedback,
    FastResponse,
    AllLeadsResponded,
    CompleteRegistration,
    PostSaleFollowUp,
    LeadsLost,
}

impl PointCategory {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::LeadsRespondedWithinHour,
            Self::LeadsVisited,
            Self::ProposalsSent,
            Self::SalesCompleted,
            Self::LeadsUpdatedSameDay,
            Self::PositiveFeedback,
            Self::FastResponse,
            Self::AllLeadsResponded,
            Self::CompleteRegistration,
            Self::PostSaleFollowUp,
            Self::LeadsLost,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LeadsRespondedWithinHour => "Leads responded within 1 hour",
            Self::LeadsVisited => "Leads visited",
            Self::ProposalsSent => "Proposals sent",
            Self::SalesCompleted => "Sales completed",
            Self::LeadsUpdatedSameDay => "Leads updated same day",
            Self::PositiveFeedback => "Positive feedback",
            Self::FastResponse => "Fast response (within 3h)",
            Self::AllLeadsResponded => "All leads responded",
            Self::CompleteRegistration => "Complete registration",
            Self::PostSaleFollowUp => "Post-sale follow-up",
            Self::LeadsLost => "Leads lost",
        }
    }

    /// Points credited (or debited, when negative) per counted unit.
    pub const fn points_per_unit(self) -> i64 {
        match self {
            Self::LeadsRespondedWithinHour => 2,
            Self::LeadsVisited => 5,
            Self::ProposalsSent => 8,
            Self::SalesCompleted => 15,
            Self::LeadsUpdatedSameDay => 2,
            Self::PositiveFeedback => 3,
            Self::FastResponse => 4,
            Self::AllLeadsResponded => 5,
            Self::CompleteRegistration => 3,
            Self::PostSaleFollowUp => 10,
            Self::LeadsLost => -1,
        }
    }

    pub const fn sign(self) -> PointSign {
        if self.points_per_unit() < 0 {
            PointSign::Negative
        } else {
            PointSign::Positive
        }
    }

    fn source_count(self, counters: &BrokerPointCounters) -> u32 {
        match self {
            Self::LeadsRespondedWithinHour => counters.leads_respondidos_1h,
            Self::LeadsVisited => counters.leads_visitados,
            Self::ProposalsSent => counters.propostas_enviadas,
            Self::SalesCompleted => counters.vendas_realizadas,
            Self::LeadsUpdatedSameDay => counters.leads_atualizados_mesmo_dia,
            Self::PositiveFeedback => counters.feedbacks_positivos,
            Self::FastResponse => counters.resposta_rapida_3h,
            Self::AllLeadsResponded => counters.todos_leads_respondidos,
            Self::CompleteRegistration => counters.cadastro_completo,
            Self::PostSaleFollowUp => counters.acompanhamento_pos_venda,
            Self::LeadsLost => counters.leads_perdidos,
        }
    }
}

/// One categorized, signed contribution to a broker's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointCategoryEntry {
    pub category: PointCategory,
    pub category_label: &'static str,
    pub count: u32,
    pub points: i64,
    pub sign: PointSign,
}

/// Ordered breakdown of a counter row plus its aggregate totals.
///
/// `total_negative` carries the magnitude of the deductions, so the balance
/// is always `total_positive - total_negative`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsSummary {
    pub entries: Vec<PointCategoryEntry>,
    pub total_positive: i64,
    pub total_negative: i64,
    pub balance: i64,
}

/// Expands a counter row into the per-category breakdown.
///
/// Categories with a zero counter are omitted; the remaining entries keep the
/// table order regardless of how the row was produced.
pub fn points_breakdown(counters: &BrokerPointCounters) -> PointsSummary {
    let mut entries = Vec::new();
    let mut total_positive = 0;
    let mut total_negative = 0;

    for category in PointCategory::ordered() {
        let count = category.source_count(counters);
        if count == 0 {
            continue;
        }

        let points = i64::from(count) * category.points_per_unit();
        match category.sign() {
            PointSign::Positive => total_positive += points,
            PointSign::Negative => total_negative += points.abs(),
        }

        entries.push(PointCategoryEntry {
            category,
            category_label: category.label(),
            count,
            points,
            sign: category.sign(),
        });
    }

    PointsSummary {
        entries,
        total_positive,
        total_negative,
        balance: total_positive - total_negative,
    }
}
