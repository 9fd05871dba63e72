//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono_tz::Tz;

use crate::clock::DEFAULT_TIMEZONE;
use crate::feed::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, FeedClientConfig};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Upstream feed settings
    pub feed: FeedClientConfig,
    /// Serve this file instead of calling the upstream feed
    pub feed_file: Option<PathBuf>,
    /// Time zone used to determine "now"
    pub timezone: Tz,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `MRT_BIND_ADDR` | `0.0.0.0:8080` |
    /// | `MRT_FEED_URL` | the Jakarta MRT station feed |
    /// | `MRT_FEED_TIMEOUT_SECS` | `30` |
    /// | `MRT_FEED_FILE` | unset |
    /// | `MRT_TIMEZONE` | `Asia/Jakarta` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_var(&lookup, "MRT_BIND_ADDR", DEFAULT_BIND_ADDR, |s| {
            s.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;

        let url = lookup("MRT_FEED_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let default_timeout = DEFAULT_TIMEOUT_SECS.to_string();
        let timeout_secs = parse_var(&lookup, "MRT_FEED_TIMEOUT_SECS", &default_timeout, |s| {
            match s.parse::<u64>() {
                Ok(0) => Err("timeout must be positive".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            }
        })?;

        let feed_file = lookup("MRT_FEED_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let timezone = parse_var(&lookup, "MRT_TIMEZONE", DEFAULT_TIMEZONE.name(), |s| {
            s.parse::<Tz>().map_err(|e| e.to_string())
        })?;

        Ok(Self {
            bind_addr,
            feed: FeedClientConfig::new()
                .with_url(url)
                .with_timeout(timeout_secs),
            feed_file,
            timezone,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    parse(raw.trim()).map_err(|message| ConfigError::Invalid { var, message })
}
