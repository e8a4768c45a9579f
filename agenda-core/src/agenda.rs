//! Agenda root directory management.

use std::path::PathBuf;

use config::{Config, File};

use crate::config::AgendaConfig;
use crate::error::{AgendaError, AgendaResult};
use crate::registry::Registry;
use crate::store::Store;

/// Root handle for an agenda installation: loads the global config and
/// opens the store/registry backing it.
#[derive(Clone)]
pub struct Agenda {
    config: AgendaConfig,
}

impl Agenda {
    pub fn load() -> AgendaResult<Self> {
        let config_path = AgendaConfig::config_path()?;

        if !config_path.exists() {
            AgendaConfig::create_default_config(&config_path)?;
        }

        let config: AgendaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))?;

        Ok(Agenda { config })
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory path in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn store(&self) -> Store {
        Store::new(self.data_path().join(crate::store::EVENTS_FILE))
    }

    /// Load the event registry from the configured data directory.
    pub fn registry(&self) -> Registry {
        Registry::load(self.store())
    }
}
