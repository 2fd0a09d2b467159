use anyhow::Result;
use axum::serve;
use log::info;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pet_care_server::backend::{self, config::ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;

    // RUST_LOG takes precedence over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Starting pet care server with {:?}", config);
    let app_state = backend::initialize_backend(&config)?;
    let router = backend::create_router(app_state, &config.allowed_origin)?;

    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", config.bind_address);

    serve(listener, router).await?;

    Ok(())
}
