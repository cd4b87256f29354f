use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::dashboard::domain::{
    ActivityRecord, ActivityWeekday, BrokerId, BrokerProfile, BrokerRole, BrokerScore, LeadRecord,
};
use crate::dashboard::repository::{DashboardRepository, RepositoryError};
use crate::dashboard::router::dashboard_router;
use crate::dashboard::service::DashboardService;
use crate::scoring::BrokerPointCounters;

pub(super) fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn profile(id: u32, nome: &str, cargo: BrokerRole, active: bool) -> BrokerProfile {
    BrokerProfile {
        id: BrokerId(id),
        nome: nome.to_string(),
        email: format!(
            "{}@imobiliaria.example",
            nome.to_lowercase().replace(' ', ".")
        ),
        foto_url: None,
        cargo,
        active,
        criado_em: timestamp(2025, 1, 10, 9),
    }
}

pub(super) fn score(
    id: u32,
    nome: &str,
    pontos: i64,
    counters: BrokerPointCounters,
) -> BrokerScore {
    BrokerScore {
        broker_id: BrokerId(id),
        nome: nome.to_string(),
        pontos,
        counters,
    }
}

/// Three touched counters plus four lost leads; no alert counters.
pub(super) fn busy_counters() -> BrokerPointCounters {
    BrokerPointCounters {
        leads_respondidos_1h: 3,
        leads_visitados: 2,
        propostas_enviadas: 1,
        leads_perdidos: 4,
        ..BrokerPointCounters::default()
    }
}

/// Counters that fire the 24h-idle warning and the stuck-stage critical rule.
pub(super) fn alerting_counters() -> BrokerPointCounters {
    BrokerPointCounters {
        leads_sem_interacao_24h: 5,
        leads_5_dias_sem_mudanca: 2,
        ..BrokerPointCounters::default()
    }
}

pub(super) fn lead(
    id: u32,
    broker: u32,
    etapa: &str,
    valor: f64,
    fechado: bool,
    atualizado_em: DateTime<Utc>,
) -> LeadRecord {
    LeadRecord {
        id,
        nome: format!("Lead {id}"),
        responsavel_id: BrokerId(broker),
        contato_nome: None,
        valor,
        etapa: etapa.to_string(),
        criado_em: timestamp(2025, 1, 2, 10),
        atualizado_em,
        fechado,
        status: if fechado { "ganho" } else { "aberto" }.to_string(),
    }
}

pub(super) fn message_activity(
    id: &str,
    broker: u32,
    dia_semana: ActivityWeekday,
    hora: u32,
) -> ActivityRecord {
    activity(id, broker, "mensagem_enviada", dia_semana, hora)
}

pub(super) fn activity(
    id: &str,
    broker: u32,
    tipo: &str,
    dia_semana: ActivityWeekday,
    hora: u32,
) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        lead_id: 1,
        user_id: BrokerId(broker),
        tipo: tipo.to_string(),
        valor_anterior: None,
        valor_novo: None,
        criado_em: timestamp(2025, 3, 3, hora),
        dia_semana,
        hora,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDashboard {
    brokers: Arc<Mutex<Vec<BrokerProfile>>>,
    scores: Arc<Mutex<Vec<BrokerScore>>>,
    leads: Arc<Mutex<Vec<LeadRecord>>>,
    activities: Arc<Mutex<Vec<ActivityRecord>>>,
}

impl MemoryDashboard {
    pub(super) fn with_rows(brokers: Vec<BrokerProfile>, scores: Vec<BrokerScore>) -> Self {
        Self {
            brokers: Arc::new(Mutex::new(brokers)),
            scores: Arc::new(Mutex::new(scores)),
            ..Self::default()
        }
    }

    pub(super) fn push_leads(&self, rows: Vec<LeadRecord>) {
        self.leads.lock().expect("leads mutex poisoned").extend(rows);
    }

    pub(super) fn push_activities(&self, rows: Vec<ActivityRecord>) {
        self.activities
            .lock()
            .expect("activities mutex poisoned")
            .extend(rows);
    }
}

impl DashboardRepository for MemoryDashboard {
    fn list_brokers(&self) -> Result<Vec<BrokerProfile>, RepositoryError> {
        Ok(self.brokers.lock().expect("brokers mutex poisoned").clone())
    }

    fn broker(&self, id: BrokerId) -> Result<Option<BrokerProfile>, RepositoryError> {
        let guard = self.brokers.lock().expect("brokers mutex poisoned");
        Ok(guard.iter().find(|profile| profile.id == id).cloned())
    }

    fn scores(&self) -> Result<Vec<BrokerScore>, RepositoryError> {
        Ok(self.scores.lock().expect("scores mutex poisoned").clone())
    }

    fn score_for(&self, id: BrokerId) -> Result<Option<BrokerScore>, RepositoryError> {
        let guard = self.scores.lock().expect("scores mutex poisoned");
        Ok(guard.iter().find(|score| score.broker_id == id).cloned())
    }

    fn leads_for(&self, id: BrokerId) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.leads.lock().expect("leads mutex poisoned");
        Ok(guard
            .iter()
            .filter(|lead| lead.responsavel_id == id)
            .cloned()
            .collect())
    }

    fn activities_for(&self, id: BrokerId) -> Result<Vec<ActivityRecord>, RepositoryError> {
        let guard = self.activities.lock().expect("activities mutex poisoned");
        Ok(guard
            .iter()
            .filter(|activity| activity.user_id == id)
            .cloned()
            .collect())
    }
}

/// Repository that fails every call, for exercising fault paths.
#[derive(Default, Clone)]
pub(super) struct UnavailableDashboard;

impl DashboardRepository for UnavailableDashboard {
    fn list_brokers(&self) -> Result<Vec<BrokerProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn broker(&self, _id: BrokerId) -> Result<Option<BrokerProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn scores(&self) -> Result<Vec<BrokerScore>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn score_for(&self, _id: BrokerId) -> Result<Option<BrokerScore>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn leads_for(&self, _id: BrokerId) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn activities_for(&self, _id: BrokerId) -> Result<Vec<ActivityRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

/// Two active brokers with scores, one inactive top scorer, one manager
/// without a score row.
pub(super) fn seeded_repository() -> MemoryDashboard {
    MemoryDashboard::with_rows(
        vec![
            profile(1, "João Dantas", BrokerRole::Broker, true),
            profile(2, "Maria Silva", BrokerRole::Broker, true),
            profile(3, "Carlos Braga", BrokerRole::Broker, false),
            profile(4, "Paula Mendes", BrokerRole::Manager, true),
        ],
        vec![
            score(1, "João Dantas", 60, busy_counters()),
            score(2, "Maria Silva", 85, alerting_counters()),
            score(3, "Carlos Braga", 99, busy_counters()),
        ],
    )
}

pub(super) fn build_service<R>(repository: R) -> DashboardService<R>
where
    R: DashboardRepository + 'static,
{
    DashboardService::new(Arc::new(repository))
}

pub(super) fn router_with(repository: MemoryDashboard) -> axum::Router {
    dashboard_router(Arc::new(build_service(repository)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
