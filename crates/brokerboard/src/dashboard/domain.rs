use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::BrokerPointCounters;

/// Identifier wrapper for brokers and other directory members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrokerId(pub u32);

/// Staff roles recorded in the directory; only sales brokers are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrokerRole {
    #[serde(rename = "Corretor")]
    Broker,
    #[serde(rename = "Gerente")]
    Manager,
    #[serde(rename = "Assistente")]
    Assistant,
}

impl BrokerRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Broker => "Corretor",
            Self::Manager => "Gerente",
            Self::Assistant => "Assistente",
        }
    }

    pub const fn is_ranked(self) -> bool {
        matches!(self, Self::Broker)
    }
}

/// Directory row for a broker or staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerProfile {
    pub id: BrokerId,
    pub nome: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_url: Option<String>,
    pub cargo: BrokerRole,
    pub active: bool,
    pub criado_em: DateTime<Utc>,
}

/// Score row as the store keeps it: the running total plus every raw counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerScore {
    pub broker_id: BrokerId,
    pub nome: String,
    pub pontos: i64,
    #[serde(flatten)]
    pub counters: BrokerPointCounters,
}

/// Pipeline lead assigned to a broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: u32,
    pub nome: String,
    pub responsavel_id: BrokerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contato_nome: Option<String>,
    pub valor: f64,
    pub etapa: String,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub fechado: bool,
    pub status: String,
}

/// Weekday tag the store precomputes on activities, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityWeekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ActivityWeekday {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Display label in the dashboard's locale.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Segunda",
            Self::Tuesday => "Terça",
            Self::Wednesday => "Quarta",
            Self::Thursday => "Quinta",
            Self::Friday => "Sexta",
            Self::Saturday => "Sábado",
            Self::Sunday => "Domingo",
        }
    }

    pub(crate) const fn row_index(self) -> usize {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }
}

/// CRM activity event attributed to a broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub lead_id: u32,
    pub user_id: BrokerId,
    pub tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_anterior: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_novo: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub dia_semana: ActivityWeekday,
    pub hora: u32,
}
