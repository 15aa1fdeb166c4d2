use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A field. Only the attributes cost imputation needs are modelled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lote {
    pub id: String,
    pub nombre: String,
    pub hectareas: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_deleted_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Lote {
    pub fn new(id: impl Into<String>, nombre: impl Into<String>, hectareas: f64) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            hectareas,
            deleted_at: None,
        }
    }
}

/// Cost per hectare, defined as zero when the field has no positive area.
pub fn costo_por_ha(costo_total: f64, hectareas: f64) -> f64 {
    if hectareas > 0.0 {
        costo_total / hectareas
    } else {
        0.0
    }
}

impl Identifiable for Lote {
    fn id(&self) -> &str {
        &self.id
    }
}


impl SoftDeletable for Lote {
    fn deleted_at(&self) -> Option<&DateTime<Utc>> {
        self.deleted_at.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costo_por_ha_guards_zero_and_negative_area() {
        assert_eq!(costo_por_ha(1000.0, 0.0), 0.0);
        assert_eq!(costo_por_ha(1000.0, -5.0), 0.0);
        assert_eq!(costo_por_ha(1000.0, 4.0), 250.0);
    }

    #[test]
    fn deserializes_without_deleted_at() {
        let lote: Lote =
            serde_json::from_str(r#"{"id":"l1","nombre":"Norte","hectareas":120.5}"#).unwrap();
        assert!(!lote.is_deleted());
        assert_eq!(lote.hectareas, 120.5);
    }
}
