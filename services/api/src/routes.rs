use crate::infra::{AppState, InMemoryDashboard};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use brokerboard::dashboard::{dashboard_router, DashboardRepository, DashboardService};
use brokerboard::error::AppError;
use brokerboard::roster::RosterImporter;
use serde::Serialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct RosterImportResponse {
    pub(crate) imported: usize,
}

pub(crate) fn with_dashboard_routes<R>(service: Arc<DashboardService<R>>) -> axum::Router
where
    R: DashboardRepository + 'static,
{
    dashboard_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/roster/import",
            axum::routing::post(roster_import_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Replaces the broker directory and score table with the uploaded CSV,
/// keeping lead and activity history in place.
pub(crate) async fn roster_import_endpoint(
    Extension(store): Extension<InMemoryDashboard>,
    body: String,
) -> Result<Json<RosterImportResponse>, AppError> {
    let reader = Cursor::new(body.into_bytes());
    let entries = RosterImporter::from_reader(reader)?;
    let imported = store.replace_roster(entries);

    Ok(Json(RosterImportResponse { imported }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brokerboard::dashboard::BrokerId;

    const ROSTER_CSV: &str = "id,nome,email,cargo,ativo,pontos,leads_respondidos_1h,vendas_realizadas\n\
        7,Ana Castro,ana.castro@imobiliaria.example,Corretor,sim,34,7,1\n\
        8,Bruno Paz,bruno.paz@imobiliaria.example,Corretor,sim,15,5,0\n";

    #[tokio::test]
    async fn roster_import_endpoint_replaces_store() {
        let store = InMemoryDashboard::with_sample_data();

        let Json(body) = roster_import_endpoint(Extension(store.clone()), ROSTER_CSV.to_string())
            .await
            .expect("roster imports");

        assert_eq!(body.imported, 2);
        let brokers = store.list_brokers().expect("store readable");
        assert_eq!(brokers.len(), 2);
        assert_eq!(brokers[0].nome, "Ana Castro");
        let scores = store.scores().expect("store readable");
        assert_eq!(scores[0].pontos, 34);

        let leads = store.leads_for(BrokerId(1)).expect("store readable");
        assert!(!leads.is_empty(), "import keeps lead history");
    }

    #[tokio::test]
    async fn roster_import_endpoint_rejects_empty_file() {
        let store = InMemoryDashboard::default();

        let result = roster_import_endpoint(Extension(store), "id,nome,email\n".to_string()).await;

        match result {
            Err(AppError::Import(_)) => {}
            other => panic!("expected an import error, got {other:?}"),
        }
    }
}
