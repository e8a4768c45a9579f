//! Global agenda configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_AGENDA_PATH: &str = "~/.agenda";

fn default_agenda_path() -> PathBuf {
    PathBuf::from(DEFAULT_AGENDA_PATH)
}

fn is_default_agenda_path(p: &PathBuf) -> bool {
    *p == default_agenda_path()
}

/// Global configuration at ~/.config/agenda/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct AgendaConfig {
    #[serde(
        default = "default_agenda_path",
        skip_serializing_if = "is_default_agenda_path"
    )]
    pub data_dir: PathBuf,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_dir: default_agenda_path(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/agenda/config.toml
    pub fn save(&self) -> AgendaResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> AgendaResult<()> {
        let contents = format!(
            "\
# agenda configuration

# Where your events live:
# data_dir = \"{}\"
",
            DEFAULT_AGENDA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
