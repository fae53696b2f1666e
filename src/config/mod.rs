/// Configuration management for the Mergington activities service
///
/// Handles server binding, static asset location, and the activity store connection.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
    /// Directory served under /static (landing page lives here)
    pub static_dir: String,
}

/// Activity store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (e.g., "sqlite://data/mergington.db?mode=rwc")
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for k8s/container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("MERGINGTON_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("MERGINGTON_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
                static_dir: std::env::var("MERGINGTON_STATIC_DIR")
                    .unwrap_or_else(|_| "static".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("MERGINGTON_DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://data/mergington.db?mode=rwc".to_string()),
                max_connections: std::env::var("MERGINGTON_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
        }
    }
}

impl Config {
    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
