// src/config.rs

use crate::hostaway::DEFAULT_REVIEWS_URL;
use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;
use thiserror::Error;
use url::Url;

pub const BIND_ADDR_VAR: &str = "REVIEWS_BIND_ADDR";
pub const MAX_WORKERS_VAR: &str = "REVIEWS_MAX_WORKERS";
pub const REVIEWS_URL_VAR: &str = "HOSTAWAY_REVIEWS_URL";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    BindAddr {
        var: &'static str,
        value: String,
        source: AddrParseError,
    },
    #[error("{var}={value:?} is not a worker count: {source}")]
    MaxWorkers {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{var} must be at least 1")]
    NoWorkers { var: &'static str },
    #[error("{var}={value:?} is not a URL: {source}")]
    ReviewsUrl {
        var: &'static str,
        value: String,
        source: url::ParseError,
    },
}

/// Startup settings. The provider credential is deliberately not here: it is
/// read from the environment on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub reviews_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                var: BIND_ADDR_VAR,
                value: bind_addr.clone(),
                source,
            })?;

        let max_workers: usize = match lookup(MAX_WORKERS_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::MaxWorkers {
                    var: MAX_WORKERS_VAR,
                    value: value.clone(),
                    source,
                })?,
            None => DEFAULT_MAX_WORKERS,
        };
        if max_workers == 0 {
            return Err(ConfigError::NoWorkers {
                var: MAX_WORKERS_VAR,
            });
        }

        let reviews_url = lookup(REVIEWS_URL_VAR).unwrap_or_else(|| DEFAULT_REVIEWS_URL.to_string());
        let reviews_url = Url::parse(&reviews_url).map_err(|source| ConfigError::ReviewsUrl {
            var: REVIEWS_URL_VAR,
            value: reviews_url.clone(),
            source,
        })?;

        Ok(Self {
            bind_addr,
            max_workers,
            reviews_url,
        })
    }
}

/// Load `.env` from the working directory, falling back to the crate root.
pub fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    let candidate = concat!(env!("CARGO_MANIFEST_DIR"), "/.env");
    let _ = dotenv::from_filename(candidate);
}
