use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    core::periodo::Periodo,
    domain::Moneda,
    errors::Result,
    utils::{
        paths::{app_data_dir, config_file_in},
        persistence::{load_json_or_default, save_json_atomic},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub moneda: Moneda,
    pub periodo: Periodo,
    /// Farm name printed on reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub establecimiento: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "es-AR".into(),
            moneda: Moneda::Ars,
            periodo: Periodo::All,
            establecimiento: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config> {
        load_json_or_default(&self.path)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        save_json_atomic(config, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
