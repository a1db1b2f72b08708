//! LoyaltyPro console service.
//!
//! Serves the member console and the admin panel on port 3000. Signed-in
//! principals are persisted under `LP_STATE_DIR`, so a restart keeps both
//! sessions.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use loyalty_pro_web::config::{ConfigError, WebConfig};
use loyalty_pro_web::error::AppError;
use loyalty_pro_web::routes;
use loyalty_pro_web::session::FileStorage;
use loyalty_pro_web::state::AppState;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to restore sessions: {0}")]
    State(#[from] AppError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loyalty_pro_web=info,tower_http=debug".into());

    // JSON for log shippers, text for terminals
    let is_json = std::env::var("LP_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run() -> Result<(), StartupError> {
    let config = WebConfig::from_env()?;

    let storage = Arc::new(FileStorage::new(&config.state_dir));
    tracing::info!(state_dir = %config.state_dir.display(), "restoring sessions");
    let state = AppState::new(config.clone(), storage)?;

    let app = routes::app(state);

    let addr = config.socket_addr();
    tracing::info!("loyalty-pro listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
