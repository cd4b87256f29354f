use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::domain::BrokerId;
use super::repository::DashboardRepository;
use super::service::{DashboardError, DashboardService};

/// HTTP surface for the dashboard, mounted under `/api`.
pub fn dashboard_router<R>(service: Arc<DashboardService<R>>) -> Router
where
    R: DashboardRepository + 'static,
{
    Router::new()
        .route("/api/brokers/rankings", get(rankings_handler::<R>))
        .route("/api/brokers/:broker_id", get(broker_detail_handler::<R>))
        .route(
            "/api/brokers/:broker_id/rank-position",
            get(rank_position_handler::<R>),
        )
        .route("/api/brokers/:broker_id/points", get(points_handler::<R>))
        .route("/api/brokers/:broker_id/alerts", get(alerts_handler::<R>))
        .route("/api/brokers/:broker_id/funnel", get(funnel_handler::<R>))
        .route("/api/brokers/:broker_id/leads", get(leads_handler::<R>))
        .route(
            "/api/brokers/:broker_id/activities",
            get(activities_handler::<R>),
        )
        .route("/api/brokers/:broker_id/heatmap", get(heatmap_handler::<R>))
        .route(
            "/api/brokers/:broker_id/performance",
            get(performance_handler::<R>),
        )
        .route(
            "/api/dashboard/metrics",
            get(dashboard_metrics_handler::<R>),
        )
        .with_state(service)
}

fn error_response(error: &DashboardError) -> Response {
    let status = match error {
        DashboardError::BrokerNotFound(_)
        | DashboardError::ScoreNotFound(_)
        | DashboardError::NotRanked(_) => StatusCode::NOT_FOUND,
        DashboardError::BrokerInactive(_) => StatusCode::FORBIDDEN,
        DashboardError::Repository(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub(crate) async fn rankings_handler<R>(State(service): State<Arc<DashboardService<R>>>) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.rankings() {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn broker_detail_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.broker_detail(BrokerId(broker_id)) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn rank_position_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.rank_position(BrokerId(broker_id)) {
        Ok(position) => (StatusCode::OK, Json(position)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.points_report(BrokerId(broker_id)) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn alerts_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.alerts(BrokerId(broker_id)) {
        Ok(alerts) => (StatusCode::OK, Json(alerts)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn funnel_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.funnel(BrokerId(broker_id)) {
        Ok(stages) => (StatusCode::OK, Json(stages)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn leads_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.leads(BrokerId(broker_id)) {
        Ok(leads) => (StatusCode::OK, Json(leads)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn activities_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.activities(BrokerId(broker_id)) {
        Ok(activities) => (StatusCode::OK, Json(activities)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn heatmap_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.heatmap(BrokerId(broker_id)) {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn performance_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(broker_id): Path<u32>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.performance(BrokerId(broker_id)) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn dashboard_metrics_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
) -> Response
where
    R: DashboardRepository + 'static,
{
    match service.dashboard_metrics() {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(error) => error_response(&error),
    }
}
