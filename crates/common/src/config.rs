//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables. Nothing here is
//! required: the store is in-memory, so a bare environment starts a server.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interface to bind
    pub host: IpAddr,
    pub port: u16,

    /// Runtime logging configuration
    pub rust_log: String,
    pub log_format: LogFormat,

    /// `Access-Control-Max-Age` sent on CORS preflight responses
    pub cors_max_age_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            rust_log: "wasatext=debug,tower_http=debug".to_string(),
            log_format: LogFormat::Pretty,
            cors_max_age_secs: 1,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let host = match env::var("HOST") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("HOST must be an IP address, got {raw:?}"))?,
            Err(_) => defaults.host,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => defaults.port,
        };

        let cors_max_age_secs = match env::var("CORS_MAX_AGE_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("CORS_MAX_AGE_SECS must be an integer, got {raw:?}"))?,
            Err(_) => defaults.cors_max_age_secs,
        };

        Ok(Self {
            host,
            port,
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_format: env::var("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or_default(),
            cors_max_age_secs,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
