//! Client configuration
//!
//! Sources, later ones winning:
//! 1. built-in defaults (`NEXT_PUBLIC_API_URL` stands in for the default API URL)
//! 2. `PLANEATS_*` environment variables

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::session::DEV_SESSION_SECRET;

/// Used when neither `PLANEATS_API_URL` nor `NEXT_PUBLIC_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// A value parsed but is not usable.
    #[error("invalid {key}: {message}")]
    Invalid {
        /// Offending key.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// No data directory was configured and the platform has none.
    #[error("could not determine a data directory, set PLANEATS_DATA_DIR")]
    NoDataDir,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_url: String,
    session_secret: Option<String>,
    session_ttl_secs: u64,
    request_timeout_secs: u64,
    data_dir: Option<PathBuf>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Secret the session key is derived from.
    pub session_secret: String,
    /// True when no secret was configured and the development one is used.
    pub dev_secret: bool,
    /// Lifetime of a new session.
    pub session_ttl: chrono::Duration,
    /// Transport timeout per request.
    pub request_timeout: Duration,
    /// Where the session file and the sandbox snapshot live.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Loads the configuration from an explicit variable map.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let default_api_url = vars
            .get("NEXT_PUBLIC_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map_or(DEFAULT_API_URL, String::as_str)
            .to_string();

        let raw: RawConfig = Config::builder()
            .set_default("api_url", default_api_url)?
            .set_default("session_ttl_secs", DEFAULT_SESSION_TTL_SECS)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(
                Environment::with_prefix("PLANEATS")
                    .try_parsing(true)
                    .source(Some(vars.into_iter().collect())),
            )
            .build()?
            .try_deserialize()?;

        let api_url = raw.api_url.trim().trim_end_matches('/').to_string();
        Url::parse(&api_url).map_err(|e| ConfigError::Invalid {
            key: "api_url",
            message: format!("{e}: {api_url}"),
        })?;

        if raw.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        let session_ttl = i64::try_from(raw.session_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| ConfigError::Invalid {
                key: "session_ttl_secs",
                message: format!("out of range: {}", raw.session_ttl_secs),
            })?;

        let (session_secret, dev_secret) = match raw.session_secret {
            Some(secret) if !secret.is_empty() => (secret, false),
            _ => {
                warn!("PLANEATS_SESSION_SECRET is not set, using the development secret");
                (DEV_SESSION_SECRET.to_string(), true)
            }
        };

        let data_dir = match raw.data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .map(|dir| dir.join("planeats"))
                .ok_or(ConfigError::NoDataDir)?,
        };

        Ok(Self {
            api_url,
            session_secret,
            dev_secret,
            session_ttl,
            request_timeout: Duration::from_secs(raw.request_timeout_secs),
            data_dir,
        })
    }
}
