use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{find_by_id, Campana},
    errors::{AgroError, Result},
    utils::{
        paths::{app_data_dir, campanas_file_in},
        persistence::{load_json_or_default, save_json_atomic},
    },
};

const FECHA_FORMAT: &str = "%Y-%m-%d";

/// Fields a user supplies when creating or editing a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampanaDraft {
    pub nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl CampanaDraft {
    pub fn new(
        nombre: impl Into<String>,
        fecha_inicio: impl Into<String>,
        fecha_fin: impl Into<String>,
    ) -> Self {
        Self {
            nombre: nombre.into(),
            fecha_inicio: fecha_inicio.into(),
            fecha_fin: fecha_fin.into(),
        }
    }
}

/// User-defined campaigns, kept client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampanaStore {
    campanas: Vec<Campana>,
}

impl CampanaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the store from `path`; a missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        load_json_or_default(path)
    }

    /// Where campaigns live under the application data directory.
    pub fn default_path() -> PathBuf {
        campanas_file_in(&app_data_dir())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_json_atomic(self, path)
    }

    pub fn create(&mut self, draft: CampanaDraft) -> Result<&Campana> {
        let campana = self.validate(None, draft, Uuid::new_v4().to_string())?;
        tracing::info!(id = %campana.id, nombre = %campana.nombre, "campaign created");
        self.campanas.push(campana);
        let last = self.campanas.len() - 1;
        Ok(&self.campanas[last])
    }

    pub fn edit(&mut self, id: &str, draft: CampanaDraft) -> Result<&Campana> {
        let position = self.position(id)?;
        let campana = self.validate(Some(id), draft, id.to_string())?;
        self.campanas[position] = campana;
        Ok(&self.campanas[position])
    }

    pub fn delete(&mut self, id: &str) -> Result<Campana> {
        let position = self.position(id)?;
        Ok(self.campanas.remove(position))
    }

    pub fn get(&self, id: &str) -> Option<&Campana> {
        find_by_id(&self.campanas, id)
    }

    pub fn list(&self) -> &[Campana] {
        &self.campanas
    }

    /// Resolves ids in the given order; any unknown id is an error.
    pub fn select(&self, ids: &[&str]) -> Result<Vec<Campana>> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| AgroError::CampaignNotFound((*id).to_string()))
            })
            .collect()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.campanas
            .iter()
            .position(|campana| campana.id == id)
            .ok_or_else(|| AgroError::CampaignNotFound(id.to_string()))
    }

    fn validate(&self, exclude: Option<&str>, draft: CampanaDraft, id: String) -> Result<Campana> {
        let nombre = draft.nombre.trim();
        if nombre.is_empty() {
            return Err(AgroError::Validation("campaign name cannot be empty".into()));
        }
        let normalized = nombre.to_lowercase();
        let duplicate = self.campanas.iter().any(|campana| {
            campana.nombre.trim().to_lowercase() == normalized
                && exclude.map_or(true, |current| campana.id != current)
        });
        if duplicate {
            return Err(AgroError::DuplicateCampaign(nombre.to_string()));
        }

        let inicio = parse_fecha(&draft.fecha_inicio)?;
        let fin = parse_fecha(&draft.fecha_fin)?;
        if fin < inicio {
            return Err(AgroError::InvalidRange {
                desde: draft.fecha_inicio,
                hasta: draft.fecha_fin,
            });
        }

        Ok(Campana {
            id,
            nombre: nombre.to_string(),
            fecha_inicio: inicio.format(FECHA_FORMAT).to_string(),
            fecha_fin: fin.format(FECHA_FORMAT).to_string(),
        })
    }
}

fn parse_fecha(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), FECHA_FORMAT)
        .map_err(|_| AgroError::InvalidDate(raw.to_string()))
}
