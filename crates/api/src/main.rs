// Mergington activities API server
// Decision: Directory lives in process memory; restarting resets every roster
// Decision: Front-end is served from STATIC_DIR by the same process

use anyhow::{Context, Result};
use mergington_api::config::ServerConfig;
use mergington_api::{build_app, build_store};
use mergington_core::telemetry::{init_telemetry, TelemetryConfig};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before reading any configuration
    dotenvy::dotenv().ok();

    // Configure via environment variables:
    // - OTEL_SERVICE_NAME: Service name (default: "mergington-api")
    // - OTEL_EXPORTER_OTLP_ENDPOINT: OTLP endpoint (e.g., "http://localhost:4317")
    // - RUST_LOG: Log filter (default: "mergington_api=debug,tower_http=debug")
    let mut telemetry_config = TelemetryConfig::from_env();
    if telemetry_config.service_name == "mergington" {
        telemetry_config.service_name = "mergington-api".to_string();
    }
    if telemetry_config.log_filter.is_none() {
        telemetry_config.log_filter = Some("mergington_api=debug,tower_http=debug".to_string());
    }
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());

    // Keep the guard alive for the lifetime of the application
    let _telemetry_guard = init_telemetry(telemetry_config);

    tracing::info!("mergington-api starting...");

    let config = ServerConfig::from_env();
    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }
    if config.cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS origins configured");
    }
    match &config.seed_file {
        Some(path) => tracing::info!(path = %path.display(), "Loading activities from seed file"),
        None => tracing::info!("Using built-in activities"),
    }
    if !config.static_dir.is_dir() {
        tracing::warn!(
            dir = %config.static_dir.display(),
            "Static directory not found, front-end will return 404"
        );
    }

    let store = build_store(&config).context("Failed to initialize activity directory")?;
    let app = build_app(store, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
