//! Field events: sowing, spraying, harvest and the rest of the agronomic calendar.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TipoEvento {
    Siembra,
    Fertilizacion,
    Pulverizacion,
    Cosecha,
    Labranza,
    Riego,
    Monitoreo,
    Sanidad,
    Otro,
}

impl TipoEvento {
    pub const ALL: [TipoEvento; 9] = [
        TipoEvento::Siembra,
        TipoEvento::Fertilizacion,
        TipoEvento::Pulverizacion,
        TipoEvento::Cosecha,
        TipoEvento::Labranza,
        TipoEvento::Riego,
        TipoEvento::Monitoreo,
        TipoEvento::Sanidad,
        TipoEvento::Otro,
    ];

    /// Wire key, as stored in the `tipo` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoEvento::Siembra => "siembra",
            TipoEvento::Fertilizacion => "fertilizacion",
            TipoEvento::Pulverizacion => "pulverizacion",
            TipoEvento::Cosecha => "cosecha",
            TipoEvento::Labranza => "labranza",
            TipoEvento::Riego => "riego",
            TipoEvento::Monitoreo => "monitoreo",
            TipoEvento::Sanidad => "sanidad",
            TipoEvento::Otro => "otro",
        }
    }

    /// Human-readable label used in report tables.
    pub fn label(&self) -> &'static str {
        match self {
            TipoEvento::Siembra => "Siembra",
            TipoEvento::Fertilizacion => "Fertilización",
            TipoEvento::Pulverizacion => "Pulverización",
            TipoEvento::Cosecha => "Cosecha",
            TipoEvento::Labranza => "Labranza",
            TipoEvento::Riego => "Riego",
            TipoEvento::Monitoreo => "Monitoreo",
            TipoEvento::Sanidad => "Sanidad",
            TipoEvento::Otro => "Otro",
        }
    }
}

impl fmt::Display for TipoEvento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An input consumed by an event, priced at the moment it was applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventoInsumo {
    pub producto_id: String,
    pub producto_nombre: String,
    pub cantidad: f64,
    #[serde(default)]
    pub precio_unitario: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Evento {
    pub id: String,
    pub lote_id: String,
    pub fecha: String,
    pub tipo: TipoEvento,
    #[serde(default)]
    pub insumos: Vec<EventoInsumo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costo_manual: Option<f64>,
    /// Precomputed as the insumo subtotals plus `costo_manual`; aggregators trust it.
    pub costo_total: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_deleted_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Evento {
    pub fn new(
        id: impl Into<String>,
        lote_id: impl Into<String>,
        fecha: impl Into<String>,
        tipo: TipoEvento,
        costo_total: f64,
    ) -> Self {
        Self {
            id: id.into(),
            lote_id: lote_id.into(),
            fecha: fecha.into(),
            tipo,
            insumos: Vec::new(),
            costo_manual: None,
            costo_total,
            deleted_at: None,
        }
    }

    pub fn with_insumo(mut self, insumo: EventoInsumo) -> Self {
        self.insumos.push(insumo);
        self
    }
}

impl Identifiable for Evento {
    fn id(&self) -> &str {
        &self.id
    }
}

impl SoftDeletable for Evento {
    fn deleted_at(&self) -> Option<&DateTime<Utc>> {
        self.deleted_at.as_ref()
    }
}

impl Fechado for Evento {
    fn fecha(&self) -> &str {
        &self.fecha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "id": "ev-1",
            "loteId": "lote-1",
            "fecha": "2026-02-10",
            "tipo": "pulverizacion",
            "insumos": [
                {
                    "productoId": "p1",
                    "productoNombre": "Glifosato",
                    "cantidad": 2,
                    "precioUnitario": 100,
                    "subtotal": 200
                }
            ],
            "costoManual": 50,
            "costoTotal": 250,
            "deletedAt": "2026-02-11T10:00:00Z"
        }"#;
        let evento: Evento = serde_json::from_str(json).unwrap();
        assert_eq!(evento.tipo, TipoEvento::Pulverizacion);
        assert_eq!(evento.insumos[0].producto_nombre, "Glifosato");
        assert!(evento.is_deleted());
    }

    #[test]
    fn labels_carry_accents_but_keys_do_not() {
        assert_eq!(TipoEvento::Fertilizacion.as_str(), "fertilizacion");
        assert_eq!(TipoEvento::Fertilizacion.label(), "Fertilización");
    }
}
