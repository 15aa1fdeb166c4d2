use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompraItem {
    pub producto_id: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
    /// `cantidad * precio_unitario`, not re-validated here.
    pub subtotal: f64,
}

impl CompraItem {
    pub fn new(producto_id: impl Into<String>, cantidad: f64, precio_unitario: f64) -> Self {
        Self {
            producto_id: producto_id.into(),
            cantidad,
            precio_unitario,
            subtotal: cantidad * precio_unitario,
        }
    }
}

/// A purchase from a supplier, possibly spanning several products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Compra {
    pub id: String,
    pub proveedor_id: String,
    pub proveedor_name: String,
    pub fecha: String,
    pub moneda: Moneda,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<CompraItem>,
}

impl Compra {
    /// Builds a purchase whose total is the sum of its item subtotals.
    pub fn new(
        id: impl Into<String>,
        proveedor_id: impl Into<String>,
        proveedor_name: impl Into<String>,
        fecha: impl Into<String>,
        moneda: Moneda,
        items: Vec<CompraItem>,
    ) -> Self {
        let total = items.iter().map(|item| item.subtotal).sum();
        Self {
            id: id.into(),
            proveedor_id: proveedor_id.into(),
            proveedor_name: proveedor_name.into(),
            fecha: fecha.into(),
            moneda,
            total,
            items,
        }
    }
}

impl Identifiable for Compra {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Fechado for Compra {
    fn fecha(&self) -> &str {
        &self.fecha
    }
}
