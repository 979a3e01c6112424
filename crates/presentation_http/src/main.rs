//! EcoRoute HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use anyhow::Context;
use application::SystemClock;
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AirQualityAdapter, AppConfig, DEFAULT_LOG_FILTER, LogFormat, init_tracing, load_reference_data,
};
use presentation_http::{
    AppState, ReloadableReferenceData, RequestIdLayer, routes, spawn_reload_handler,
};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Requests carry everything in the query string
const MAX_BODY_BYTES: usize = 16 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map_or(LogFormat::default(), |c| c.server.log_format);
    init_tracing(log_format, DEFAULT_LOG_FILTER)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!("EcoRoute v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        zone_crs = %config.paid_parking.zone_crs,
        "Configuration loaded"
    );

    // Datasets are required; refuse to start without them
    let initial_data = load_reference_data(&config).context("Failed to load reference data")?;
    let reference_data = spawn_reload_handler(ReloadableReferenceData::from_config(initial_data));

    let air_quality = AirQualityAdapter::new(&config.air_quality)
        .map_err(|e| anyhow::anyhow!("Failed to initialize air-quality client: {e}"))?;

    let state = AppState::new(
        reference_data,
        Arc::new(air_quality),
        Arc::new(SystemClock),
        config.traffic.result_key.as_str(),
    );

    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    // Order matters: last added = outermost
    let app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);
    info!("SIGHUP reloads reference data (Unix only)");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            signalled_tx.send(()).ok();
        })
        .into_future();

    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
            tokio::time::sleep(shutdown_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => warn!("Shutdown timeout elapsed, dropping open connections"),
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
