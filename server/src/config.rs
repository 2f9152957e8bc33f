//! Server configuration parsed from environment variables.
//!
//! `HOST` and `PORT` choose the listen address. Leptos build options
//! (site root, output name) come separately from `get_configuration`.

use std::net::SocketAddr;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("invalid listen address {host}:{port}")]
    InvalidAddr { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { host, port })
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] when `host` is not an IP literal.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddr { host: self.host.clone(), port: self.port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
