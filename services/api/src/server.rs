use crate::cli::ServeArgs;
use crate::infra::{AppState, DataDir};
use crate::routes::dashboard_routes;
use adpulse::config::AppConfig;
use adpulse::error::AppError;
use adpulse::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };
    let data_dir = DataDir(Arc::new(config.data.dir.clone()));

    let app = dashboard_routes()
        .layer(Extension(app_state))
        .layer(Extension(data_dir))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, data_dir = %config.data.dir.display(), "campaign dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
