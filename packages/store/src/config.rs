//! # Client configuration — `account-client.toml`
//!
//! Tells the client where the account API lives and how long its two timers
//! run. On the web the base URL is baked in at build time from the
//! `ENDPOINT_URL` environment variable ([`ClientConfig::from_build_env`]); native
//! builds read `<data_dir>/account-client/account-client.toml`
//! ([`ClientConfig::load_or`]) and use the build-time config when it is absent.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [timing]
//! notice_dismiss_secs = 4   # notice auto-dismiss
//! redirect_delay_secs = 4   # redirect after a rejected profile load
//! ```
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Timer durations, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_delay_secs")]
    pub notice_dismiss_secs: u64,
    #[serde(default = "default_delay_secs")]
    pub redirect_delay_secs: u64,
}

fn default_delay_secs() -> u64 {
    4
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notice_dismiss_secs: default_delay_secs(),
            redirect_delay_secs: default_delay_secs(),
        }
    }
}

impl ClientConfig {
    /// Configuration with the base URL taken from `ENDPOINT_URL` at compile
    /// time, or the default when it was not set.
    pub fn from_build_env() -> Self {
        match option_env!("ENDPOINT_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "account-client.toml"
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_secs(self.timing.notice_dismiss_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_secs(self.timing.redirect_delay_secs)
    }

    /// Where native builds look for the config file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> PathBuf {
        crate::app_data_dir().join(Self::filename())
    }

    /// Load the config file at `path`.
    ///
    /// A missing file yields `fallback`. An unreadable or malformed file is
    /// logged and also yields `fallback`. A file that parses replaces the
    /// fallback entirely; its missing keys take the built-in defaults.
    pub fn load_or(path: &Path, fallback: Self) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return fallback,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return fallback;
            }
        };
        match Self::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded client config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                fallback
            }
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
