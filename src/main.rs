use actix_web::HttpServer;
use pam_gateway::{
    AppMetrics, AppState, LogConfig, MetricsConfig, ServerConfig, TrackerConfig, create_app,
    telemetry::init_tracing,
};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing(&LogConfig::from_env());

    let server_config = ServerConfig::from_env();
    let tracker_config = TrackerConfig::from_env();
    let metrics_config = MetricsConfig::from_env();

    let metrics = AppMetrics::new().map_err(io::Error::other)?;
    let state = AppState::from_config(&tracker_config, metrics).map_err(io::Error::other)?;

    tracing::info!(
        bind_address = %server_config.bind_address,
        tracker = %state.tracker.events_url(),
        database = %tracker_config.database,
        users = state.directory.len(),
        "Starting PAM gateway"
    );

    HttpServer::new(move || create_app(state.clone(), metrics_config.clone()))
        .bind(&server_config.bind_address)?
        .run()
        .await
}
