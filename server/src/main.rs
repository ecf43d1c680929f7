#![recursion_limit = "256"]

mod config;
mod content;
mod routes;
mod state;

use crate::config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Router(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;
    let content = content::load_or_warn(&config.content_path);
    let state = state::AppState::new(config.variant.features(), content);

    let app = routes::app(state).map_err(ServerError::Router)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, variant = config.variant.as_str(), "halawah listening");
    axum::serve(listener, app).await?;
    Ok(())
}
