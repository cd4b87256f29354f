use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::dashboard::domain::{BrokerId, BrokerProfile, BrokerRole, BrokerScore};
use crate::scoring::BrokerPointCounters;

/// One roster row split into its directory and score halves.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub profile: BrokerProfile,
    pub score: BrokerScore,
}

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<RosterEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        entries.push(record?.into_entry());
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: u32,
    nome: String,
    email: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    foto_url: Option<String>,
    #[serde(default = "default_role", deserialize_with = "role_or_default")]
    cargo: BrokerRole,
    #[serde(default = "default_active", deserialize_with = "active_flag")]
    ativo: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    criado_em: Option<String>,
    #[serde(default)]
    pontos: i64,
    #[serde(default)]
    leads_respondidos_1h: u32,
    #[serde(default)]
    leads_visitados: u32,
    #[serde(default)]
    propostas_enviadas: u32,
    #[serde(default)]
    vendas_realizadas: u32,
    #[serde(default)]
    leads_atualizados_mesmo_dia: u32,
    #[serde(default)]
    feedbacks_positivos: u32,
    #[serde(default)]
    resposta_rapida_3h: u32,
    #[serde(default)]
    todos_leads_respondidos: u32,
    #[serde(default)]
    cadastro_completo: u32,
    #[serde(default)]
    acompanhamento_pos_venda: u32,
    #[serde(default)]
    leads_perdidos: u32,
    #[serde(default)]
    leads_sem_interacao_24h: u32,
    #[serde(default)]
    leads_respondidos_apos_18h: u32,
    #[serde(default)]
    leads_5_dias_sem_mudanca: u32,
    #[serde(default)]
    leads_ignorados_48h: u32,
    #[serde(default)]
    leads_tempo_resposta_acima_12h: u32,
}

impl RosterRow {
    fn into_entry(self) -> RosterEntry {
        let criado_em = self
            .criado_em
            .as_deref()
            .and_then(parse_datetime)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_else(Utc::now);

        let counters = BrokerPointCounters {
            leads_respondidos_1h: self.leads_respondidos_1h,
            leads_visitados: self.leads_visitados,
            propostas_enviadas: self.propostas_enviadas,
            vendas_realizadas: self.vendas_realizadas,
            leads_atualizados_mesmo_dia: self.leads_atualizados_mesmo_dia,
            feedbacks_positivos: self.feedbacks_positivos,
            resposta_rapida_3h: self.resposta_rapida_3h,
            todos_leads_respondidos: self.todos_leads_respondidos,
            cadastro_completo: self.cadastro_completo,
            acompanhamento_pos_venda: self.acompanhamento_pos_venda,
            leads_perdidos: self.leads_perdidos,
            leads_sem_interacao_24h: self.leads_sem_interacao_24h,
            leads_respondidos_apos_18h: self.leads_respondidos_apos_18h,
            leads_5_dias_sem_mudanca: self.leads_5_dias_sem_mudanca,
            leads_ignorados_48h: self.leads_ignorados_48h,
            leads_tempo_resposta_acima_12h: self.leads_tempo_resposta_acima_12h,
        };

        let id = BrokerId(self.id);
        RosterEntry {
            profile: BrokerProfile {
                id,
                nome: self.nome.clone(),
                email: self.email,
                foto_url: self.foto_url,
                cargo: self.cargo,
                active: self.ativo,
                criado_em,
            },
            score: BrokerScore {
                broker_id: id,
                nome: self.nome,
                pontos: self.pontos,
                counters,
            },
        }
    }
}

const fn default_role() -> BrokerRole {
    BrokerRole::Broker
}

const fn default_active() -> bool {
    true
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn role_or_default<'de, D>(deserializer: D) -> Result<BrokerRole, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(BrokerRole::Broker),
        Some("Corretor") => Ok(BrokerRole::Broker),
        Some("Gerente") => Ok(BrokerRole::Manager),
        Some("Assistente") => Ok(BrokerRole::Assistant),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unknown cargo value: {other}"
        ))),
    }
}

fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(true),
        Some("true") | Some("1") | Some("sim") => Ok(true),
        Some("false") | Some("0") | Some("nao") | Some("não") => Ok(false),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid ativo flag: {other}"
        ))),
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
