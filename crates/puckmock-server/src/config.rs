//! Listener configuration loaded from the environment.
//!
//! Each provider stand-in listens on its own port. Both ports and the
//! bind host can be overridden; unset variables fall back to the
//! defaults the integration harness expects.

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

/// Default port for the play-by-play endpoint.
pub const DEFAULT_PLAY_BY_PLAY_PORT: u16 = 8125;

/// Default port for the stats endpoint.
pub const DEFAULT_STATS_PORT: u16 = 8124;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while reading listener configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held an unparseable value.
    #[error("invalid {name}={value:?}: {reason}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Raw value as found.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// Host and port did not form a socket address.
    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}

/// Ports and host for both listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind both listeners to.
    pub host: String,
    /// Play-by-play listener port.
    pub play_by_play_port: u16,
    /// Stats listener port.
    pub stats_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            play_by_play_port: DEFAULT_PLAY_BY_PLAY_PORT,
            stats_port: DEFAULT_STATS_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `PLAYBYPLAY_PORT` -- play-by-play port (default 8125)
    /// - `STATS_PORT` -- stats port (default 8124)
    /// - `PUCKMOCK_HOST` -- bind host (default `0.0.0.0`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let play_by_play_port = match read("PLAYBYPLAY_PORT") {
            Some(raw) => parse_port("PLAYBYPLAY_PORT", raw)?,
            None => DEFAULT_PLAY_BY_PLAY_PORT,
        };
        let stats_port = match read("STATS_PORT") {
            Some(raw) => parse_port("STATS_PORT", raw)?,
            None => DEFAULT_STATS_PORT,
        };
        let host = read("PUCKMOCK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        Ok(Self {
            host,
            play_by_play_port,
            stats_port,
        })
    }

    /// Socket address of the play-by-play listener.
    pub fn play_by_play_addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr(&self.host, self.play_by_play_port)
    }

    /// Socket address of the stats listener.
    pub fn stats_addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr(&self.host, self.stats_port)
    }
}

fn parse_port(name: &'static str, raw: String) -> Result<u16, ConfigError> {
    let parsed = raw.trim().parse::<u16>();
    parsed.map_err(|e| invalid_var(name, raw, &e))
}

fn invalid_var(name: &'static str, value: String, err: &ParseIntError) -> ConfigError {
    ConfigError::InvalidVar {
        name,
        value,
        reason: err.to_string(),
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let addr = format!("{host}:{port}");
    let parsed = addr.parse::<SocketAddr>();
    parsed.map_err(|e| invalid_address(&addr, &e))
}

fn invalid_address(addr: &str, err: &AddrParseError) -> ConfigError {
    ConfigError::InvalidAddress(format!("{addr}: {err}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.play_by_play_port, 8125);
        assert_eq!(config.stats_port, 8124);
    }

    #[test]
    fn overrides_from_variables() {
        let config = load(&[
            ("PLAYBYPLAY_PORT", "9125"),
            ("STATS_PORT", "9124"),
            ("PUCKMOCK_HOST", "127.0.0.1"),
        ])
        .unwrap();
        let expected: SocketAddr = "127.0.0.1:9124".parse().unwrap();
        assert_eq!(config.play_by_play_port, 9125);
        assert_eq!(config.stats_port, 9124);
        assert_eq!(config.stats_addr().unwrap(), expected);
    }

    #[test]
    fn empty_value_uses_default() {
        let config = load(&[("STATS_PORT", "")]).unwrap();
        assert_eq!(config.stats_port, DEFAULT_STATS_PORT);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PLAYBYPLAY_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PLAYBYPLAY_PORT", .. }));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = load(&[("STATS_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "STATS_PORT", .. }));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let config = load(&[("PUCKMOCK_HOST", "not a host")]).unwrap();
        let err = config.play_by_play_addr().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddress(_)));
    }
}
