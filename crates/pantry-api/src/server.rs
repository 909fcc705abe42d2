//! HTTP server bootstrap

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::ServerConfig, routes, state::AppState};

/// The Pantry API server
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    /// Create a server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind and serve until the process is stopped
    pub async fn serve(self) -> anyhow::Result<()> {
        let state = AppState::new();
        let app = routes::all_routes().with_state(state);

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Pantry API listening on {}", addr);

        axum::serve(listener, app)
            .await
            .context("server terminated unexpectedly")?;

        Ok(())
    }
}
