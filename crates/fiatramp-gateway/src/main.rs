//! Gateway binary: configuration, seeding, and the axum server loop.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use fiatramp_gateway::{AppState, router};
use fiatramp_types::{GatewayConfig, constants};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                err.to_string(),
            ));
        }
    };

    tracing::info!(
        gateway = constants::GATEWAY_NAME,
        version = constants::VERSION,
        daily_limit = %config.daily_limit,
        licensed_partners = config.licensed_partners.len(),
        "starting gateway"
    );

    let state = AppState::seeded(config);
    let addr = SocketAddr::from(([0, 0, 0, 0], constants::DEFAULT_API_PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(state)).await
}
