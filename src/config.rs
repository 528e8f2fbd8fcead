use crate::db::models::SettingsKey;
use crate::error::SyncError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration.
///
/// Every value the maintenance flow used to hard-code is a field here, overridable
/// through `CREDSYNC_*` environment variables (a `.env` file is honored by `main`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite URL of the settings store, e.g. `sqlite:data/autoads.db`.
    pub database_url: String,
    /// Path to the service-account credential file.
    pub cred_path: PathBuf,
    /// Owner of the settings row to overwrite.
    pub user_id: i64,
    /// Settings category of the row.
    pub category: String,
    /// Settings key of the row.
    pub config_key: String,
    /// Default log level when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data/autoads.db".to_string(),
            cred_path: PathBuf::from("gcp-service-account.json"),
            user_id: 1,
            category: "ai".to_string(),
            config_key: "gcp_service_account_json".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration: defaults overlaid with `CREDSYNC_*` env vars.
    pub fn from_env() -> Result<Self, SyncError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("CREDSYNC_"))
            .extract()?;
        Ok(cfg)
    }

    /// The key triple identifying the row this run targets.
    pub fn settings_key(&self) -> SettingsKey {
        SettingsKey {
            user_id: self.user_id,
            category: self.category.clone(),
            config_key: self.config_key.clone(),
        }
    }
}
