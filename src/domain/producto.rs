use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Product categories tracked by the stock module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CategoriaProducto {
    Semilla,
    Fertilizante,
    Herbicida,
    Insecticida,
    Fungicida,
    Combustible,
    Veterinario,
    Otro,
}

impl CategoriaProducto {
    pub const ALL: [CategoriaProducto; 8] = [
        CategoriaProducto::Semilla,
        CategoriaProducto::Fertilizante,
        CategoriaProducto::Herbicida,
        CategoriaProducto::Insecticida,
        CategoriaProducto::Fungicida,
        CategoriaProducto::Combustible,
        CategoriaProducto::Veterinario,
        CategoriaProducto::Otro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoriaProducto::Semilla => "semilla",
            CategoriaProducto::Fertilizante => "fertilizante",
            CategoriaProducto::Herbicida => "herbicida",
            CategoriaProducto::Insecticida => "insecticida",
            CategoriaProducto::Fungicida => "fungicida",
            CategoriaProducto::Combustible => "combustible",
            CategoriaProducto::Veterinario => "veterinario",
            CategoriaProducto::Otro => "otro",
        }
    }
}

impl fmt::Display for CategoriaProducto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub categoria: Option<CategoriaProducto>,
}

impl Producto {
    pub fn new(
        id: impl Into<String>,
        nombre: impl Into<String>,
        categoria: Option<CategoriaProducto>,
    ) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            categoria,
        }
    }
}

impl Identifiable for Producto {
    fn id(&self) -> &str {
        &self.id
    }
}
