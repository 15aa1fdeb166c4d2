use serde::{Deserialize, Serialize};

use crate::{core::periodo::RangoFechas, domain::common::*};

/// A user-defined, named date range (a growing season, a fiscal year).
///
/// Bounds are inclusive `YYYY-MM-DD` strings and are compared literally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campana {
    pub id: String,
    pub nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl Campana {
    /// The campaign bounds as a literal date range.
    pub fn rango(&self) -> RangoFechas {
        RangoFechas::new(&self.fecha_inicio, &self.fecha_fin)
    }
}

impl Identifiable for Campana {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rango_is_inclusive_on_both_ends() {
        let campana = Campana {
            id: "c1".into(),
            nombre: "Trigo 26".into(),
            fecha_inicio: "2026-06-01".into(),
            fecha_fin: "2026-12-31".into(),
        };
        let rango = campana.rango();
        assert!(rango.contains("2026-06-01"));
        assert!(rango.contains("2026-12-31"));
        assert!(!rango.contains("2027-01-01"));
    }
}
