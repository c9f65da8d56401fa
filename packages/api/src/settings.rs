//! Client settings, layered: built-in defaults, then an optional
//! `config.toml`, then `ONBOARD__*` environment variables
//! (e.g. `ONBOARD__API__BASE_URL`, `ONBOARD__API__TIMEOUT_SECS`).

use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Upper bound on the wait for any backend call.
pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: i64 = 10;
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ONBOARD";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS as u64,
        }
    }
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Effective per-request timeout, never above [`MAX_REQUEST_TIMEOUT`].
    /// Zero means "use the maximum".
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => MAX_REQUEST_TIMEOUT,
            secs => Duration::from_secs(secs).min(MAX_REQUEST_TIMEOUT),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
}

impl Settings {
    /// Load settings from the default sources.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::defaults()?
            .add_source(
                File::with_name(CONFIG_FILE)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load settings from a TOML document layered over the defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)
    }
}
