use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment overrides, e.g. `CAMPAIGN_ADMIN_API__ENDPOINT`.
pub const ENV_PREFIX: &str = "CAMPAIGN_ADMIN_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("session.organization_id must not be empty")]
    MissingOrganization,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub data: DataConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

/// Who is operating the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub organization_id: String,
    /// Grants the create and archive affordances.
    pub admin_perms: bool,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/graphql".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            organization_id: "1".to_string(),
            admin_perms: false,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then `~/.config/campaign-admin/config.toml`,
    /// then `CAMPAIGN_ADMIN_*` environment variables.
    /// Returns `Default` if the layered sources cannot be extracted.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::from_figment(Self::figment(&config_path)) {
            Ok(config) => {
                log::info!("Loaded config (file: {})", config_path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {e} (using defaults)",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Layered provider stack rooted at `config_path`.
    pub fn figment(config_path: &std::path::Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Reject settings the list view cannot mount without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.organization_id.trim().is_empty() {
            return Err(ConfigError::MissingOrganization);
        }
        Ok(())
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("campaign-admin"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("campaign-admin").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
