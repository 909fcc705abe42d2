//! API server configuration

use serde::{Deserialize, Serialize};

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Create a new server config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `PANTRY_HOST` / `PANTRY_PORT`, falling back
    /// to the defaults for unset or unparseable values
    pub fn from_env() -> Self {
        let host = std::env::var("PANTRY_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("PANTRY_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);

        Self { host, port }
    }

    /// The socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
