use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;
use todo_tasks::Backend;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid DB_MAX_CONNECTIONS value: {0}")]
    InvalidMaxConnections(String),
    #[error("Unsupported DATABASE_URL (expected postgres:// or sqlite:): {0}")]
    UnsupportedDatabaseUrl(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub backend: Backend,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_or("DATABASE_URL", Backend::Postgres.default_url());

        let backend = Backend::from_url(&database_url)
            .ok_or_else(|| ConfigError::UnsupportedDatabaseUrl(database_url.clone()))?;

        let port_str = env_or("PORT", "8080");
        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host_str = env_or("HOST", "0.0.0.0");
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let max_connections_str = env_or("DB_MAX_CONNECTIONS", "10");
        let max_connections = max_connections_str
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidMaxConnections(max_connections_str))?;

        Ok(Config {
            database_url,
            backend,
            host,
            port,
            max_connections,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Unset and empty variables both fall back to `default`
fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
