//! Cost imputation: attributes event and contractor costs to the fields they
//! were incurred on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    core::periodo::{activos_en, rango_utc, Periodo, RangoFechas},
    domain::{lote::costo_por_ha, Evento, Lote, SoftDeletable, TrabajoContratista},
    utils::capitalize,
};

/// Accumulated cost of a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostoLote {
    pub lote_id: String,
    pub costo_eventos: f64,
    pub costo_trabajos: f64,
    pub costo_total: f64,
    pub costo_por_ha: f64,
}

impl CostoLote {
    fn new(lote_id: &str, hectareas: f64, costo_eventos: f64, costo_trabajos: f64) -> Self {
        let costo_total = costo_eventos + costo_trabajos;
        Self {
            lote_id: lote_id.to_string(),
            costo_eventos,
            costo_trabajos,
            costo_total,
            costo_por_ha: costo_por_ha(costo_total, hectareas),
        }
    }
}

/// Where a cost line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrigenCosto {
    Evento,
    Trabajo,
}

/// One line of a field's cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineaCosto {
    pub id: String,
    pub fecha: String,
    pub origen: OrigenCosto,
    pub concepto: String,
    pub monto: f64,
}

/// A field's cost joined with its name and area, as shown in ranking tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostoLoteRow {
    pub lote_id: String,
    pub nombre: String,
    pub hectareas: f64,
    pub costo_eventos: f64,
    pub costo_trabajos: f64,
    pub costo_total: f64,
    pub costo_por_ha: f64,
}

impl CostoLoteRow {
    fn from_costo(lote: &Lote, costo: CostoLote) -> Self {
        Self {
            lote_id: costo.lote_id,
            nombre: lote.nombre.clone(),
            hectareas: lote.hectareas,
            costo_eventos: costo.costo_eventos,
            costo_trabajos: costo.costo_trabajos,
            costo_total: costo.costo_total,
            costo_por_ha: costo.costo_por_ha,
        }
    }
}

/// Costs of every field in `lotes`, keyed by lote id.
///
/// Runs in O(E + T + L): one pass per input. Soft-deleted records and jobs
/// without a field are ignored; fields with no activity get zeroed entries.
pub fn compute_costos_all_lotes(
    lotes: &[Lote],
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
) -> HashMap<String, CostoLote> {
    acumular(
        lotes,
        eventos.iter().filter(|evento| !evento.is_deleted()),
        trabajos.iter().filter(|trabajo| !trabajo.is_deleted()),
    )
}

/// Cost of a single field. Prefer [`compute_costos_all_lotes`] when costing
/// many fields; calling this in a loop is O(L * (E + T)).
pub fn compute_costo_lote(
    lote_id: &str,
    hectareas: f64,
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
) -> CostoLote {
    let costo_eventos = eventos
        .iter()
        .filter(|evento| !evento.is_deleted() && evento.lote_id == lote_id)
        .map(|evento| evento.costo_total)
        .sum();
    let costo_trabajos = trabajos
        .iter()
        .filter(|trabajo| !trabajo.is_deleted() && trabajo.lote_id.as_deref() == Some(lote_id))
        .map(|trabajo| trabajo.costo)
        .sum();
    CostoLote::new(lote_id, hectareas, costo_eventos, costo_trabajos)
}

/// Line items for a field's cost detail, newest first.
pub fn build_lineas_costo(
    lote_id: &str,
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
) -> Vec<LineaCosto> {
    let mut lineas: Vec<LineaCosto> = eventos
        .iter()
        .filter(|evento| !evento.is_deleted() && evento.lote_id == lote_id)
        .map(|evento| LineaCosto {
            id: evento.id.clone(),
            fecha: evento.fecha.clone(),
            origen: OrigenCosto::Evento,
            concepto: concepto_evento(evento),
            monto: evento.costo_total,
        })
        .collect();

    lineas.extend(
        trabajos
            .iter()
            .filter(|trabajo| {
                !trabajo.is_deleted() && trabajo.lote_id.as_deref() == Some(lote_id)
            })
            .map(|trabajo| LineaCosto {
                id: trabajo.id.clone(),
                fecha: trabajo.fecha.clone(),
                origen: OrigenCosto::Trabajo,
                concepto: format!(
                    "{} — {}",
                    capitalize(trabajo.tipo.as_str()),
                    trabajo.contratista_nombre
                ),
                monto: trabajo.costo,
            }),
    );

    lineas.sort_by(|a, b| b.fecha.cmp(&a.fecha));
    lineas
}

fn concepto_evento(evento: &Evento) -> String {
    if evento.insumos.is_empty() {
        capitalize(evento.tipo.as_str())
    } else {
        evento
            .insumos
            .iter()
            .map(|insumo| insumo.producto_nombre.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Per-field costs over a dashboard period, skipping idle fields, most
/// expensive per hectare first.
///
/// Record dates are compared against the UTC calendar dates of the period
/// bounds.
pub fn compute_costos_all_lotes_by_period(
    lotes: &[Lote],
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
    periodo: Periodo,
    clock: &dyn Clock,
) -> Vec<CostoLoteRow> {
    let rango = rango_utc(periodo, clock);
    let mut rows = rows_en_rango(lotes, eventos, trabajos, rango.as_ref());
    rows.retain(|row| row.costo_total != 0.0);
    tracing::debug!(%periodo, lotes = rows.len(), "costed lotes for period");
    rows
}

/// Per-field costs between two literal `YYYY-MM-DD` bounds (inclusive).
///
/// Every field is kept, including those without cost, so comparison tables
/// line up across ranges.
pub fn compute_costos_all_lotes_by_date_range(
    lotes: &[Lote],
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
    rango: &RangoFechas,
) -> Vec<CostoLoteRow> {
    rows_en_rango(lotes, eventos, trabajos, Some(rango))
}

fn rows_en_rango(
    lotes: &[Lote],
    eventos: &[Evento],
    trabajos: &[TrabajoContratista],
    rango: Option<&RangoFechas>,
) -> Vec<CostoLoteRow> {
    let eventos = activos_en(eventos, rango);
    let trabajos = activos_en(trabajos, rango);
    let mut costos = acumular(lotes, eventos, trabajos);

    let mut rows: Vec<CostoLoteRow> = lotes
        .iter()
        .filter_map(|lote| {
            costos
                .remove(&lote.id)
                .map(|costo| CostoLoteRow::from_costo(lote, costo))
        })
        .collect();
    sort_by_costo_por_ha(&mut rows);
    rows
}

pub(crate) fn sort_by_costo_por_ha(rows: &mut [CostoLoteRow]) {
    rows.sort_by(|a, b| b.costo_por_ha.total_cmp(&a.costo_por_ha));
}

/// Caller filters; this only groups and sums.
fn acumular<'a>(
    lotes: &[Lote],
    eventos: impl IntoIterator<Item = &'a Evento>,
    trabajos: impl IntoIterator<Item = &'a TrabajoContratista>,
) -> HashMap<String, CostoLote> {
    let mut por_eventos: HashMap<&str, f64> = HashMap::new();
    for evento in eventos {
        *por_eventos.entry(evento.lote_id.as_str()).or_default() += evento.costo_total;
    }

    let mut por_trabajos: HashMap<&str, f64> = HashMap::new();
    for trabajo in trabajos {
        if let Some(lote_id) = trabajo.lote_id.as_deref() {
            *por_trabajos.entry(lote_id).or_default() += trabajo.costo;
        }
    }

    lotes
        .iter()
        .map(|lote| {
            let costo = CostoLote::new(
                &lote.id,
                lote.hectareas,
                por_eventos.get(lote.id.as_str()).copied().unwrap_or(0.0),
                por_trabajos.get(lote.id.as_str()).copied().unwrap_or(0.0),
            );
            (lote.id.clone(), costo)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventoInsumo, TipoEvento, TipoTrabajo};
    use chrono::Utc;

    fn insumo(nombre: &str, subtotal: f64) -> EventoInsumo {
        EventoInsumo {
            producto_id: nombre.to_lowercase(),
            producto_nombre: nombre.to_string(),
            cantidad: 1.0,
            precio_unitario: subtotal,
            subtotal,
        }
    }

    #[test]
    fn single_lote_matches_bulk_computation() {
        let lotes = vec![Lote::new("l1", "Norte", 50.0), Lote::new("l2", "Sur", 20.0)];
        let eventos = vec![
            Evento::new("e1", "l1", "2026-01-10", TipoEvento::Siembra, 1000.0),
            Evento::new("e2", "l2", "2026-01-11", TipoEvento::Riego, 400.0),
        ];
        let trabajos = vec![TrabajoContratista::new(
            "t1",
            Some("l1"),
            "2026-01-12",
            TipoTrabajo::Cosecha,
            "Hnos. Pérez",
            500.0,
        )];

        let bulk = compute_costos_all_lotes(&lotes, &eventos, &trabajos);
        let single = compute_costo_lote("l1", 50.0, &eventos, &trabajos);
        assert_eq!(bulk["l1"], single);
        assert_eq!(single.costo_total, 1500.0);
        assert_eq!(single.costo_por_ha, 30.0);
    }

    #[test]
    fn lotes_without_activity_are_zeroed() {
        let lotes = vec![Lote::new("l1", "Norte", 50.0)];
        let costos = compute_costos_all_lotes(&lotes, &[], &[]);
        assert_eq!(costos["l1"].costo_total, 0.0);
        assert_eq!(costos["l1"].costo_por_ha, 0.0);
    }

    #[test]
    fn lineas_use_insumo_names_or_capitalized_type() {
        let eventos = vec![
            Evento::new("e1", "l1", "2026-01-10", TipoEvento::Pulverizacion, 300.0)
                .with_insumo(insumo("Glifosato", 200.0))
                .with_insumo(insumo("Coadyuvante", 100.0)),
            Evento::new("e2", "l1", "2026-03-01", TipoEvento::Monitoreo, 50.0),
        ];
        let trabajos = vec![TrabajoContratista::new(
            "t1",
            Some("l1"),
            "2026-02-01",
            TipoTrabajo::Siembra,
            "Agro Servicios",
            800.0,
        )];

        let lineas = build_lineas_costo("l1", &eventos, &trabajos);
        let conceptos: Vec<&str> = lineas.iter().map(|l| l.concepto.as_str()).collect();
        assert_eq!(
            conceptos,
            vec!["Monitoreo", "Siembra — Agro Servicios", "Glifosato, Coadyuvante"]
        );
        assert_eq!(lineas[1].origen, OrigenCosto::Trabajo);
    }

    #[test]
    fn lineas_skip_other_lotes_and_deleted_records() {
        let mut borrado = Evento::new("e2", "l1", "2026-01-11", TipoEvento::Riego, 90.0);
        borrado.deleted_at = Some(Utc::now());
        let eventos = vec![
            Evento::new("e1", "l2", "2026-01-10", TipoEvento::Siembra, 100.0),
            borrado,
        ];
        assert!(build_lineas_costo("l1", &eventos, &[]).is_empty());
    }

    #[test]
    fn date_range_keeps_idle_lotes_sorted_by_cost_per_ha() {
        let lotes = vec![
            Lote::new("l1", "Norte", 100.0),
            Lote::new("l2", "Sur", 10.0),
            Lote::new("l3", "Bajo", 30.0),
        ];
        let eventos = vec![
            Evento::new("e1", "l1", "2025-08-01", TipoEvento::Siembra, 1000.0),
            Evento::new("e2", "l2", "2025-09-01", TipoEvento::Siembra, 1000.0),
            Evento::new("e3", "l3", "2026-09-01", TipoEvento::Siembra, 1000.0),
        ];
        let rango = RangoFechas::new("2025-07-01", "2026-06-30");
        let rows = compute_costos_all_lotes_by_date_range(&lotes, &eventos, &[], &rango);
        let ids: Vec<&str> = rows.iter().map(|r| r.lote_id.as_str()).collect();
        assert_eq!(ids, vec!["l2", "l1", "l3"]);
        assert_eq!(rows[2].costo_total, 0.0);
        assert_eq!(rows[0].nombre, "Sur");
    }
}
