use std::path::{Path, PathBuf};

use serde::*;

use crate::infrastructure::telemetry::TelemetryConfig;

/// Environment variable prefix, e.g. `BETON__API__BASE_URL`.
const ENV_PREFIX: &str = "BETON";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotifierConfig {
    #[serde(default = "Default::default")]
    pub api: ApiConfig,
    #[serde(default = "Default::default")]
    pub storage: StorageConfig,
    #[serde(default = "Default::default")]
    pub poller: PollerConfig,
    #[serde(default = "Default::default")]
    pub alerts: AlertsConfig,
    #[serde(default = "Default::default")]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Api root, with trailing slash.
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Holds the token file and, unless `database_url` is set, the database.
    #[serde(default = "StorageConfig::default_data_dir")]
    pub data_dir: String,
    #[serde(default = "Default::default")]
    pub database_url: Option<String>,
    #[serde(default = "StorageConfig::default_retention_days")]
    pub retention_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    #[serde(default = "PollerConfig::default_interval_secs")]
    pub interval_secs: u64,
    /// First retry delay; the n-th retry waits n times this.
    #[serde(default = "PollerConfig::default_backoff_secs")]
    pub backoff_secs: u64,
    #[serde(default = "PollerConfig::default_max_backoff_secs")]
    pub max_backoff_secs: u64,
    #[serde(default = "PollerConfig::default_constraint_recheck_secs")]
    pub constraint_recheck_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlertsConfig {
    #[serde(default = "Default::default")]
    pub sink: AlertSinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSinkKind {
    #[default]
    Log,
    NotifySend,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn default_base_url() -> String {
        "http://localhost:8000/api/".to_string()
    }
    pub fn default_timeout_secs() -> u64 {
        30
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            database_url: None,
            retention_days: Self::default_retention_days(),
        }
    }
}

impl StorageConfig {
    pub fn default_data_dir() -> String {
        ".beton-notifier".to_string()
    }
    pub fn default_retention_days() -> u32 {
        30
    }

    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "sqlite://{}?mode=rwc",
                Path::new(&self.data_dir).join("notifications.db").display()
            ),
        }
    }

    pub fn token_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("tokens.json")
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_secs: Self::default_interval_secs(),
            backoff_secs: Self::default_backoff_secs(),
            max_backoff_secs: Self::default_max_backoff_secs(),
            constraint_recheck_secs: Self::default_constraint_recheck_secs(),
        }
    }
}

impl PollerConfig {
    pub fn default_interval_secs() -> u64 {
        15 * 60
    }
    pub fn default_backoff_secs() -> u64 {
        30
    }
    pub fn default_max_backoff_secs() -> u64 {
        5 * 60 * 60
    }
    pub fn default_constraint_recheck_secs() -> u64 {
        30
    }
}

/// `config.yaml` in the working directory (optional), then `file` when
/// given, then `BETON__*` environment variables.
pub fn build_config(file: Option<&Path>) -> anyhow::Result<NotifierConfig> {
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    if let Some(file) = file {
        config = config.add_source(
            config::File::from(file)
                .format(config::FileFormat::Yaml)
                .required(true),
        );
    }
    config = config.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(config.build()?.try_deserialize()?)
}
