//! CralLabs documentation server.
//!
//! Serves the server-rendered Leptos site and its hydration assets.

mod config;
mod routes;
mod state;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let addr = config.addr()?;

    let state = state::AppState::new();
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "crallabs-docs listening");
    axum::serve(listener, app).await?;
    Ok(())
}
