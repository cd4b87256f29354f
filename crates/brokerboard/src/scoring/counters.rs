use serde::{Deserialize, Serialize};

/// Raw activity counters accumulated for one broker over the reporting window.
///
/// Field names follow the upstream CRM export. Every column defaults to zero
/// so partial rows deserialize cleanly; the rule tables treat a missing
/// counter and an explicit zero identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerPointCounters {
    #[serde(default)]
    pub leads_respondidos_1h: u32,
    #[serde(default)]
    pub leads_visitados: u32,
    #[serde(default)]
    pub propostas_enviadas: u32,
    #[serde(default)]
    pub vendas_realizadas: u32,
    #[serde(default)]
    pub leads_atualizados_mesmo_dia: u32,
    #[serde(default)]
    pub feedbacks_positivos: u32,
    #[serde(default)]
    pub resposta_rapida_3h: u32,
    #[serde(default)]
    pub todos_leads_respondidos: u32,
    #[serde(default)]
    pub cadastro_completo: u32,
    #[serde(default)]
    pub acompanhamento_pos_venda: u32,
    #[serde(default)]
    pub leads_perdidos: u32,
    #[serde(default)]
    pub leads_sem_interacao_24h: u32,
    #[serde(default)]
    pub leads_respondidos_apos_18h: u32,
    #[serde(default)]
    pub leads_5_dias_sem_mudanca: u32,
    // Tracked by the CRM but not scored or alerted on.
    #[serde(default)]
    pub leads_ignorados_48h: u32,
    #[serde(default)]
    pub leads_tempo_resposta_acima_12h: u32,
}
