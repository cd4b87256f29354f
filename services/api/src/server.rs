use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDashboard};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use brokerboard::config::AppConfig;
use brokerboard::dashboard::DashboardService;
use brokerboard::error::AppError;
use brokerboard::roster::RosterImporter;
use brokerboard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(roster) = args.roster.take() {
        config.seed.roster_path = Some(roster);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = match config.seed.roster_path.as_deref() {
        Some(path) => {
            let entries = RosterImporter::from_path(path)?;
            info!(rows = entries.len(), path = %path.display(), "roster loaded");
            InMemoryDashboard::from_roster(entries)
        }
        None => InMemoryDashboard::with_sample_data(),
    };
    let service = Arc::new(DashboardService::new(Arc::new(store.clone())));

    let app = with_dashboard_routes(service)
        .layer(Extension(store))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "broker performance board ready");

    axum::serve(listener, app)
        .await
        .map_err(AppError::Server)?;
    Ok(())
}
