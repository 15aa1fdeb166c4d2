//! The data-provider seam: aggregators receive read-only snapshots and never
//! reach into a global store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{find_by_id, Compra, Evento, Lote, Producto, TrabajoContratista},
    errors::Result,
    utils::{
        paths::{app_data_dir, snapshot_file_in},
        persistence::{load_json, save_json_atomic},
    },
};

/// Everything the aggregators read, as handed over by the persistence layer.
///
/// `deletedAt` is read leniently on lotes, events and jobs: any non-null
/// string marks the record deleted, even when it is not a valid timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub lotes: Vec<Lote>,
    #[serde(default)]
    pub eventos: Vec<Evento>,
    #[serde(default)]
    pub trabajos: Vec<TrabajoContratista>,
    #[serde(default)]
    pub compras: Vec<Compra>,
    #[serde(default)]
    pub productos: Vec<Producto>,
}

impl Snapshot {
    pub fn lote(&self, id: &str) -> Option<&Lote> {
        find_by_id(&self.lotes, id)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        save_json_atomic(self, path)
    }
}

/// Source of snapshots. Implementations fetch fresh data on every call.
pub trait DataSource: Send + Sync {
    fn snapshot(&self) -> Result<Snapshot>;
}

impl DataSource for Snapshot {
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.clone())
    }
}

/// Reads a JSON snapshot exported to disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot under the application data directory.
    pub fn default_location() -> Self {
        Self::new(snapshot_file_in(&app_data_dir()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn snapshot(&self) -> Result<Snapshot> {
        let snapshot: Snapshot = load_json(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            lotes = snapshot.lotes.len(),
            eventos = snapshot.eventos.len(),
            trabajos = snapshot.trabajos.len(),
            compras = snapshot.compras.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SoftDeletable;

    #[test]
    fn loads_records_with_free_form_deleted_at() {
        let json = r#"{
            "lotes": [{"id": "l1", "nombre": "Norte", "hectareas": 10, "deletedAt": "ayer"}],
            "eventos": [{
                "id": "e1",
                "loteId": "l1",
                "fecha": "2026-02-10",
                "tipo": "siembra",
                "costoTotal": 100,
                "deletedAt": "2026-02-11 08:30:00"
            }],
            "trabajos": [{
                "id": "t1",
                "fecha": "2026-02-12",
                "tipo": "flete",
                "contratistaNombre": "Ruta 5",
                "costo": 50,
                "deletedAt": null
            }]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.lotes[0].is_deleted());
        assert!(snapshot.eventos[0].is_deleted());
        assert!(!snapshot.trabajos[0].is_deleted());
    }
}
