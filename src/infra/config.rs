//! Centralized configuration (environment variables + defaults).

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_DB_PATH: &str = "/nfs/demo.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Startup settings, built once and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_host: IpAddr,
    /// SQLite database file; created on first start.
    pub database_path: PathBuf,
    pub max_connections: u32,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// Recognised variables: `PORT`, `BIND_HOST`, `CONTACTS_DB_PATH`,
    /// `DB_MAX_CONNECTIONS`. Unset or empty variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {:?}", v),
            })?,
            None => DEFAULT_PORT,
        };

        let bind_host = get("BIND_HOST")
            .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string())
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "BIND_HOST".to_string(),
                reason: e.to_string(),
            })?;

        let database_path = get("CONTACTS_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "DB_MAX_CONNECTIONS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", v),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            port,
            bind_host,
            database_path,
            max_connections,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}
