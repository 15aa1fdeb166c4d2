use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TipoTrabajo {
    Siembra,
    Cosecha,
    Pulverizacion,
    Fertilizacion,
    Labranza,
    Flete,
    Otro,
}

impl TipoTrabajo {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoTrabajo::Siembra => "siembra",
            TipoTrabajo::Cosecha => "cosecha",
            TipoTrabajo::Pulverizacion => "pulverizacion",
            TipoTrabajo::Fertilizacion => "fertilizacion",
            TipoTrabajo::Labranza => "labranza",
            TipoTrabajo::Flete => "flete",
            TipoTrabajo::Otro => "otro",
        }
    }
}

/// Work billed by a contractor. Always settled in ARS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoContratista {
    pub id: String,
    /// Jobs not tied to a field (freight, general maintenance) have no lote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<String>,
    pub fecha: String,
    pub costo: f64,
    pub contratista_nombre: String,
    pub tipo: TipoTrabajo,
    #[serde(
        default,
        deserialize_with = "deserialize_deleted_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TrabajoContratista {
    pub fn new(
        id: impl Into<String>,
        lote_id: Option<&str>,
        fecha: impl Into<String>,
        tipo: TipoTrabajo,
        contratista_nombre: impl Into<String>,
        costo: f64,
    ) -> Self {
        Self {
            id: id.into(),
            lote_id: lote_id.map(str::to_string),
            fecha: fecha.into(),
            costo,
            contratista_nombre: contratista_nombre.into(),
            tipo,
            deleted_at: None,
        }
    }
}

impl Identifiable for TrabajoContratista {
    fn id(&self) -> &str {
        &self.id
    }
}

impl SoftDeletable for TrabajoContratista {
    fn deleted_at(&self) -> Option<&DateTime<Utc>> {
        self.deleted_at.as_ref()
    }
}

impl Fechado for TrabajoContratista {
    fn fecha(&self) -> &str {
        &self.fecha
    }
}
