//! Side-by-side comparison of campaigns.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        imputacion::{compute_costos_all_lotes_by_date_range, CostoLoteRow},
        periodo::activos_en,
    },
    domain::{Campana, CategoriaProducto, Evento, Lote, TrabajoContratista},
};

/// One campaign's cost table and headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativaCampanaData {
    pub campana_id: String,
    pub campana_nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub rows: Vec<CostoLoteRow>,
    pub total_general: f64,
    /// Cost per hectare over the fields that had any cost in the campaign.
    pub promedio_ha: f64,
    pub total_eventos: usize,
    pub total_trabajos: usize,
}

/// Costs each campaign independently, keeping the caller's order.
pub fn compute_comparativa(
    campanas: &[Campana],
    lotes: &[Lote],
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
) -> Vec<ComparativaCampanaData> {
    campanas
        .iter()
        .map(|campana| {
            let rango = campana.rango();
            let rows = compute_costos_all_lotes_by_date_range(lotes, eventos, trabajos, &rango);

            let total_general: f64 = rows.iter().map(|row| row.costo_total).sum();
            let hectareas_activas: f64 = rows
                .iter()
                .filter(|row| row.costo_total > 0.0)
                .map(|row| row.hectareas)
                .sum();
            let promedio_ha = if hectareas_activas > 0.0 {
                total_general / hectareas_activas
            } else {
                0.0
            };

            ComparativaCampanaData {
                campana_id: campana.id.clone(),
                campana_nombre: campana.nombre.clone(),
                fecha_inicio: campana.fecha_inicio.clone(),
                fecha_fin: campana.fecha_fin.clone(),
                total_general,
                promedio_ha,
                total_eventos: activos_en(eventos, Some(&rango)).len(),
                total_trabajos: activos_en(trabajos, Some(&rango)).len(),
                rows,
            }
        })
        .collect()
}

/// A chart series: values are keyed by `id`, `label` is only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerieComparativa {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricaComparativa {
    #[default]
    CostoTotal,
    CostoPorHa,
}

impl MetricaComparativa {
    fn of(&self, row: &CostoLoteRow) -> f64 {
        match self {
            MetricaComparativa::CostoTotal => row.costo_total,
            MetricaComparativa::CostoPorHa => row.costo_por_ha,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativaChartRow {
    pub lote_id: String,
    pub lote: String,
    /// Campaign id to value.
    pub valores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativaChart {
    pub series: Vec<SerieComparativa>,
    pub rows: Vec<ComparativaChartRow>,
}

/// Pivots the comparison into one row per field with one value per campaign.
/// Fields appear in the order they are first met; a campaign that does not
/// list a field contributes zero.
pub fn build_comparativa_chart_data(
    data: &[ComparativaCampanaData],
    metrica: MetricaComparativa,
) -> ComparativaChart {
    let series = series_de(data);
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<ComparativaChartRow> = Vec::new();

    for campana in data {
        for row in &campana.rows {
            let slot = *index.entry(row.lote_id.as_str()).or_insert_with(|| {
                rows.push(ComparativaChartRow {
                    lote_id: row.lote_id.clone(),
                    lote: row.nombre.clone(),
                    valores: zeros(&series),
                });
                rows.len() - 1
            });
            rows[slot]
                .valores
                .insert(campana.campana_id.clone(), metrica.of(row));
        }
    }

    ComparativaChart { series, rows }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriaChartRow {
    pub categoria: String,
    pub label: String,
    pub valores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriasChart {
    pub series: Vec<SerieComparativa>,
    pub rows: Vec<CategoriaChartRow>,
}

const CONTRATISTAS: &str = "contratistas";

/// Spend per category and campaign.
///
/// Event inputs carry no product category, so all event spend is reported
/// under `otro`; only `contratistas` is a real split. Categories with no spend
/// in any campaign are left out.
pub fn build_categorias_chart_data(data: &[ComparativaCampanaData]) -> CategoriasChart {
    let series = series_de(data);
    let mut otro = zeros(&series);
    let mut contratistas = zeros(&series);

    for campana in data {
        let eventos: f64 = campana.rows.iter().map(|row| row.costo_eventos).sum();
        let trabajos: f64 = campana.rows.iter().map(|row| row.costo_trabajos).sum();
        otro.insert(campana.campana_id.clone(), eventos);
        contratistas.insert(campana.campana_id.clone(), trabajos);
    }

    let mut rows: Vec<CategoriaChartRow> = CategoriaProducto::ALL
        .iter()
        .map(|categoria| CategoriaChartRow {
            categoria: categoria.as_str().to_string(),
            label: crate::utils::capitalize(categoria.as_str()),
            valores: if *categoria == CategoriaProducto::Otro {
                otro.clone()
            } else {
                zeros(&series)
            },
        })
        .collect();
    rows.push(CategoriaChartRow {
        categoria: CONTRATISTAS.to_string(),
        label: crate::utils::capitalize(CONTRATISTAS),
        valores: contratistas,
    });
    rows.retain(|row| row.valores.values().any(|value| *value != 0.0));

    CategoriasChart { series, rows }
}

fn series_de(data: &[ComparativaCampanaData]) -> Vec<SerieComparativa> {
    data.iter()
        .map(|campana| SerieComparativa {
            id: campana.campana_id.clone(),
            label: campana.campana_nombre.clone(),
        })
        .collect()
}

fn zeros(series: &[SerieComparativa]) -> BTreeMap<String, f64> {
    series.iter().map(|serie| (serie.id.clone(), 0.0)).collect()
}
