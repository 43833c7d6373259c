//! Runtime configuration for the CLI probe.
//!
//! Defaults are overridden by `HABILITATIONS_`-prefixed environment
//! variables, e.g. `HABILITATIONS_DB_PATH=/var/lib/habilitations.sqlite3`.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "HABILITATIONS_";
const DEFAULT_DB_FILE_NAME: &str = "habilitations.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabilitationsConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for HabilitationsConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: habilitations_core::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl HabilitationsConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads `.env` when present, then extracts the merged configuration.
    pub fn load() -> Result<Self, figment::Error> {
        dotenvy::dotenv().ok();
        Self::figment().extract()
    }
}
