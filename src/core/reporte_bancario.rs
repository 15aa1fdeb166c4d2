//! Figures for the printable bank-credit report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    core::periodo::{activos_en, fechados_en, rango_utc, Periodo},
    domain::{Compra, Evento, Lote, Moneda, SoftDeletable, TipoEvento, TrabajoContratista},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenGeneral {
    pub total_hectareas: f64,
    pub cantidad_lotes: usize,
    /// ARS purchases plus contractor work in the period.
    pub inversion_total: f64,
    pub costo_por_ha: f64,
}

pub fn compute_resumen_general(
    lotes: &[Lote],
    compras: &[Compra],
    trabajos: &[TrabajoContratista],
    periodo: Periodo,
    clock: &dyn Clock,
) -> ResumenGeneral {
    let activos: Vec<&Lote> = lotes.iter().filter(|lote| !lote.is_deleted()).collect();
    let total_hectareas: f64 = activos.iter().map(|lote| lote.hectareas).sum();

    let rango = rango_utc(periodo, clock);
    let compras_ars: f64 = fechados_en(compras, rango.as_ref())
        .into_iter()
        .filter(|compra| compra.moneda == Moneda::Ars)
        .map(|compra| compra.total)
        .sum();
    let contratistas: f64 = activos_en(trabajos, rango.as_ref())
        .into_iter()
        .map(|trabajo| trabajo.costo)
        .sum();
    let inversion_total = compras_ars + contratistas;

    ResumenGeneral {
        total_hectareas,
        cantidad_lotes: activos.len(),
        inversion_total,
        costo_por_ha: if total_hectareas > 0.0 {
            (inversion_total / total_hectareas).round()
        } else {
            0.0
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActividadItem {
    pub tipo: TipoEvento,
    pub label: String,
    pub cantidad: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActividadResumen {
    pub items: Vec<ActividadItem>,
    pub total_eventos: usize,
}

/// Event counts per type in the period, most frequent first.
pub fn compute_actividad_resumen(
    eventos: &[Evento],
    periodo: Periodo,
    clock: &dyn Clock,
) -> ActividadResumen {
    let rango = rango_utc(periodo, clock);
    let activos = activos_en(eventos, rango.as_ref());

    let mut conteo: BTreeMap<TipoEvento, usize> = BTreeMap::new();
    for evento in &activos {
        *conteo.entry(evento.tipo).or_default() += 1;
    }

    let mut items: Vec<ActividadItem> = conteo
        .into_iter()
        .map(|(tipo, cantidad)| ActividadItem {
            tipo,
            label: tipo.label().to_string(),
            cantidad,
        })
        .collect();
    items.sort_by(|a, b| b.cantidad.cmp(&a.cantidad));

    ActividadResumen {
        items,
        total_eventos: activos.len(),
    }
}
