use chrono::{DateTime, Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use brokerboard::dashboard::{
    ActivityRecord, ActivityWeekday, BrokerId, BrokerProfile, BrokerRole, BrokerScore,
    DashboardRepository, LeadRecord, RepositoryError,
};
use brokerboard::roster::RosterEntry;
use brokerboard::scoring::BrokerPointCounters;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Mutex-guarded store standing in for the production database.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDashboard {
    brokers: Arc<Mutex<Vec<BrokerProfile>>>,
    scores: Arc<Mutex<Vec<BrokerScore>>>,
    leads: Arc<Mutex<Vec<LeadRecord>>>,
    activities: Arc<Mutex<Vec<ActivityRecord>>>,
}

impl InMemoryDashboard {
    pub(crate) fn from_roster(entries: Vec<RosterEntry>) -> Self {
        let store = Self::default();
        store.replace_roster(entries);
        store
    }

    /// Swaps the directory and score table for freshly imported roster rows,
    /// returning how many were loaded. Lead and activity history is kept.
    pub(crate) fn replace_roster(&self, entries: Vec<RosterEntry>) -> usize {
        let imported = entries.len();
        let (brokers, scores) = entries
            .into_iter()
            .map(|entry| (entry.profile, entry.score))
            .unzip();
        *self.brokers.lock().expect("store mutex poisoned") = brokers;
        *self.scores.lock().expect("store mutex poisoned") = scores;
        imported
    }

    /// Starting rows for a small agency so the service is usable out of the
    /// box: three active brokers, one inactive, one manager without scores.
    pub(crate) fn with_sample_data() -> Self {
        let now = Utc::now();
        Self {
            brokers: Arc::new(Mutex::new(sample_brokers(now))),
            scores: Arc::new(Mutex::new(sample_scores())),
            leads: Arc::new(Mutex::new(sample_leads(now))),
            activities: Arc::new(Mutex::new(sample_activities(now))),
        }
    }
}

impl DashboardRepository for InMemoryDashboard {
    fn list_brokers(&self) -> Result<Vec<BrokerProfile>, RepositoryError> {
        Ok(self.brokers.lock().expect("store mutex poisoned").clone())
    }

    fn broker(&self, id: BrokerId) -> Result<Option<BrokerProfile>, RepositoryError> {
        let guard = self.brokers.lock().expect("store mutex poisoned");
        Ok(guard.iter().find(|profile| profile.id == id).cloned())
    }

    fn scores(&self) -> Result<Vec<BrokerScore>, RepositoryError> {
        Ok(self.scores.lock().expect("store mutex poisoned").clone())
    }

    fn score_for(&self, id: BrokerId) -> Result<Option<BrokerScore>, RepositoryError> {
        let guard = self.scores.lock().expect("store mutex poisoned");
        Ok(guard.iter().find(|score| score.broker_id == id).cloned())
    }

    fn leads_for(&self, id: BrokerId) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.leads.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .filter(|lead| lead.responsavel_id == id)
            .cloned()
            .collect())
    }

    fn activities_for(&self, id: BrokerId) -> Result<Vec<ActivityRecord>, RepositoryError> {
        let guard = self.activities.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .filter(|activity| activity.user_id == id)
            .cloned()
            .collect())
    }
}

fn sample_brokers(now: DateTime<Utc>) -> Vec<BrokerProfile> {
    vec![
        BrokerProfile {
            id: BrokerId(1),
            nome: "João Dantas".to_string(),
            email: "joao.dantas@imobiliaria.example".to_string(),
            foto_url: Some("https://cdn.imobiliaria.example/fotos/joao-dantas.jpg".to_string()),
            cargo: BrokerRole::Broker,
            active: true,
            criado_em: now - Duration::days(420),
        },
        BrokerProfile {
            id: BrokerId(2),
            nome: "Maria Silva".to_string(),
            email: "maria.silva@imobiliaria.example".to_string(),
            foto_url: Some("https://cdn.imobiliaria.example/fotos/maria-silva.jpg".to_string()),
            cargo: BrokerRole::Broker,
            active: true,
            criado_em: now - Duration::days(380),
        },
        BrokerProfile {
            id: BrokerId(3),
            nome: "Carlos Braga".to_string(),
            email: "carlos.braga@imobiliaria.example".to_string(),
            foto_url: None,
            cargo: BrokerRole::Broker,
            active: true,
            criado_em: now - Duration::days(260),
        },
        BrokerProfile {
            id: BrokerId(4),
            nome: "Rafael Costa".to_string(),
            email: "rafael.costa@imobiliaria.example".to_string(),
            foto_url: None,
            cargo: BrokerRole::Broker,
            active: false,
            criado_em: now - Duration::days(600),
        },
        BrokerProfile {
            id: BrokerId(5),
            nome: "Paula Mendes".to_string(),
            email: "paula.mendes@imobiliaria.example".to_string(),
            foto_url: None,
            cargo: BrokerRole::Manager,
            active: true,
            criado_em: now - Duration::days(700),
        },
    ]
}

fn sample_scores() -> Vec<BrokerScore> {
    vec![
        BrokerScore {
            broker_id: BrokerId(1),
            nome: "João Dantas".to_string(),
            pontos: 226,
            counters: BrokerPointCounters {
                leads_respondidos_1h: 12,
                leads_visitados: 8,
                propostas_enviadas: 5,
                vendas_realizadas: 3,
                leads_atualizados_mesmo_dia: 6,
                feedbacks_positivos: 4,
                resposta_rapida_3h: 7,
                todos_leads_respondidos: 1,
                cadastro_completo: 1,
                acompanhamento_pos_venda: 2,
                leads_perdidos: 3,
                leads_sem_interacao_24h: 2,
                ..BrokerPointCounters::default()
            },
        },
        BrokerScore {
            broker_id: BrokerId(2),
            nome: "Maria Silva".to_string(),
            pontos: 249,
            counters: BrokerPointCounters {
                leads_respondidos_1h: 15,
                leads_visitados: 10,
                propostas_enviadas: 7,
                vendas_realizadas: 4,
                feedbacks_positivos: 6,
                resposta_rapida_3h: 9,
                leads_perdidos: 1,
                ..BrokerPointCounters::default()
            },
        },
        BrokerScore {
            broker_id: BrokerId(3),
            nome: "Carlos Braga".to_string(),
            pontos: 64,
            counters: BrokerPointCounters {
                leads_respondidos_1h: 6,
                leads_visitados: 4,
                propostas_enviadas: 2,
                vendas_realizadas: 1,
                leads_atualizados_mesmo_dia: 3,
                leads_perdidos: 5,
                leads_5_dias_sem_mudanca: 1,
                ..BrokerPointCounters::default()
            },
        },
        BrokerScore {
            broker_id: BrokerId(4),
            nome: "Rafael Costa".to_string(),
            pontos: 11,
            counters: BrokerPointCounters {
                leads_respondidos_1h: 4,
                leads_visitados: 1,
                leads_perdidos: 2,
                ..BrokerPointCounters::default()
            },
        },
    ]
}

fn sample_leads(now: DateTime<Utc>) -> Vec<LeadRecord> {
    vec![
        lead_row(1, 1, "Apartamento Leblon", "Fernanda Rocha", 850_000.0, "Fechamento", true, now - Duration::days(100)),
        lead_row(2, 1, "Casa Búzios", "Ricardo Teles", 620_000.0, "Fechamento", true, now - Duration::days(70)),
        lead_row(3, 1, "Cobertura Ipanema", "Beatriz Lins", 940_000.0, "Fechamento", true, now - Duration::days(12)),
        lead_row(4, 1, "Loft Jardim Oceânico", "Sérgio Prado", 480_000.0, "Proposta", false, now - Duration::days(3)),
        lead_row(5, 1, "Apartamento Tijuca", "Camila Nunes", 350_000.0, "Contato", false, now - Duration::days(1)),
        lead_row(6, 2, "Sala Comercial Centro", "Otávio Ramos", 1_200_000.0, "Fechamento", true, now - Duration::days(40)),
        lead_row(7, 2, "Casa Niterói", "Helena Dias", 500_000.0, "Visita", false, now - Duration::days(2)),
        lead_row(8, 2, "Studio Botafogo", "Marcos Vidal", 750_000.0, "Proposta", false, now - Duration::days(5)),
        lead_row(9, 3, "Terreno Barra", "Luciana Alves", 280_000.0, "Contato", false, now - Duration::days(8)),
    ]
}

fn lead_row(
    id: u32,
    broker: u32,
    nome: &str,
    contato: &str,
    valor: f64,
    etapa: &str,
    fechado: bool,
    atualizado_em: DateTime<Utc>,
) -> LeadRecord {
    LeadRecord {
        id,
        nome: nome.to_string(),
        responsavel_id: BrokerId(broker),
        contato_nome: Some(contato.to_string()),
        valor,
        etapa: etapa.to_string(),
        criado_em: atualizado_em - Duration::days(14),
        atualizado_em,
        fechado,
        status: if fechado { "ganho" } else { "aberto" }.to_string(),
    }
}

fn sample_activities(now: DateTime<Utc>) -> Vec<ActivityRecord> {
    vec![
        message_row("act-1", 1, 1, ActivityWeekday::Monday, 9, now - Duration::days(4)),
        message_row("act-2", 1, 1, ActivityWeekday::Monday, 9, now - Duration::days(4)),
        message_row("act-3", 4, 1, ActivityWeekday::Monday, 10, now - Duration::days(4)),
        message_row("act-4", 5, 1, ActivityWeekday::Wednesday, 14, now - Duration::days(2)),
        message_row("act-5", 3, 1, ActivityWeekday::Saturday, 11, now - Duration::days(6)),
        ActivityRecord {
            id: "act-6".to_string(),
            lead_id: 4,
            user_id: BrokerId(1),
            tipo: "etapa_alterada".to_string(),
            valor_anterior: Some("Contato".to_string()),
            valor_novo: Some("Proposta".to_string()),
            criado_em: now - Duration::days(3),
            dia_semana: ActivityWeekday::Tuesday,
            hora: 15,
        },
        message_row("act-7", 7, 2, ActivityWeekday::Friday, 16, now - Duration::days(1)),
        message_row("act-8", 8, 2, ActivityWeekday::Thursday, 10, now - Duration::days(1)),
    ]
}

fn message_row(
    id: &str,
    lead_id: u32,
    broker: u32,
    dia_semana: ActivityWeekday,
    hora: u32,
    criado_em: DateTime<Utc>,
) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        lead_id,
        user_id: BrokerId(broker),
        tipo: "mensagem_enviada".to_string(),
        valor_anterior: None,
        valor_novo: None,
        criado_em,
        dia_semana,
        hora,
    }
}
