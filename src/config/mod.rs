use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{errors::LedgerError, utils};

const STATE_FILE: &str = "state.json";

/// Persisted CLI preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_ledger: Option<PathBuf>,
}

/// Loads and saves the state file under the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_base(utils::app_data_dir())
    }

    /// Uses an explicit base directory instead of the user-level default.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        utils::ensure_dir(&base)?;
        Ok(Self {
            path: base.join(STATE_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the state atomically by staging to a temporary file.
    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn record_last_ledger(&self, path: Option<&Path>) -> Result<(), LedgerError> {
        let mut config = self.load()?;
        config.last_opened_ledger = path.map(Path::to_path_buf);
        self.save(&config)
    }
}
