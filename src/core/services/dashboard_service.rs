use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    core::{
        dashboard::{
            compute_cashflow, compute_evolucion_gastos, compute_gasto_por_proveedor,
            CashflowSummary, EvolucionGastosSummary, ProveedorGastoItem,
        },
        imputacion::{
            build_lineas_costo, compute_costo_lote, compute_costos_all_lotes_by_period,
            CostoLote, CostoLoteRow, LineaCosto,
        },
        periodo::Periodo,
    },
    domain::{Lote, Moneda},
    errors::{AgroError, Result},
    storage::DataSource,
};

/// Everything the main dashboard renders for one period and currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub periodo: Periodo,
    pub moneda: Moneda,
    pub costos_lotes: Vec<CostoLoteRow>,
    pub proveedores: Vec<ProveedorGastoItem>,
    pub cashflow: CashflowSummary,
    pub evolucion: EvolucionGastosSummary,
}

/// A field's cost with its line-by-line breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoteDetalle {
    pub lote: Lote,
    pub costo: CostoLote,
    pub lineas: Vec<LineaCosto>,
}

pub struct DashboardService;

impl DashboardService {
    #[tracing::instrument(skip(source, clock))]
    pub fn build(
        source: &dyn DataSource,
        periodo: Periodo,
        moneda: Moneda,
        clock: &dyn Clock,
    ) -> Result<DashboardView> {
        let snapshot = source.snapshot()?;
        let view = DashboardView {
            periodo,
            moneda,
            costos_lotes: compute_costos_all_lotes_by_period(
                &snapshot.lotes,
                &snapshot.eventos,
                &snapshot.trabajos,
                periodo,
                clock,
            ),
            proveedores: compute_gasto_por_proveedor(&snapshot.compras, periodo, clock),
            cashflow: compute_cashflow(
                &snapshot.compras,
                &snapshot.trabajos,
                periodo,
                moneda,
                clock,
            ),
            evolucion: compute_evolucion_gastos(
                &snapshot.compras,
                &snapshot.trabajos,
                &snapshot.productos,
                periodo,
                moneda,
                clock,
            ),
        };
        tracing::info!(
            lotes = view.costos_lotes.len(),
            proveedores = view.proveedores.len(),
            meses = view.cashflow.mensual.len(),
            "dashboard built"
        );
        Ok(view)
    }

    #[tracing::instrument(skip(source))]
    pub fn detalle_lote(source: &dyn DataSource, lote_id: &str) -> Result<LoteDetalle> {
        let snapshot = source.snapshot()?;
        let lote = snapshot
            .lote(lote_id)
            .cloned()
            .ok_or_else(|| AgroError::LoteNotFound(lote_id.to_string()))?;
        let costo = compute_costo_lote(
            &lote.id,
            lote.hectareas,
            &snapshot.eventos,
            &snapshot.trabajos,
        );
        let lineas = build_lineas_costo(&lote.id, &snapshot.eventos, &snapshot.trabajos);
        Ok(LoteDetalle {
            lote,
            costo,
            lineas,
        })
    }
}
