//! Pantry API server binary

use pantry_api::{ApiServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pantry_api=info,pantry_core=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    ApiServer::new(config).serve().await
}
