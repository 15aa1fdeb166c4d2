use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    core::{
        dashboard::{compute_gasto_por_proveedor, ProveedorGastoItem},
        imputacion::{compute_costos_all_lotes_by_period, CostoLoteRow},
        periodo::Periodo,
        reporte_bancario::{
            compute_actividad_resumen, compute_resumen_general, ActividadResumen, ResumenGeneral,
        },
    },
    errors::Result,
    storage::DataSource,
    utils::build_info,
};

/// The printable bank-credit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteBancario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub establecimiento: Option<String>,
    pub periodo: Periodo,
    /// Local date the report was generated, `YYYY-MM-DD`.
    pub generado: String,
    pub resumen: ResumenGeneral,
    pub actividad: ActividadResumen,
    pub costos_lotes: Vec<CostoLoteRow>,
    pub proveedores: Vec<ProveedorGastoItem>,
    pub build: String,
}

pub struct ReporteBancarioService;

impl ReporteBancarioService {
    #[tracing::instrument(skip(source, clock))]
    pub fn generar(
        source: &dyn DataSource,
        establecimiento: Option<&str>,
        periodo: Periodo,
        clock: &dyn Clock,
    ) -> Result<ReporteBancario> {
        let snapshot = source.snapshot()?;
        let reporte = ReporteBancario {
            establecimiento: establecimiento.map(str::to_string),
            periodo,
            generado: clock.now().format("%Y-%m-%d").to_string(),
            resumen: compute_resumen_general(
                &snapshot.lotes,
                &snapshot.compras,
                &snapshot.trabajos,
                periodo,
                clock,
            ),
            actividad: compute_actividad_resumen(&snapshot.eventos, periodo, clock),
            costos_lotes: compute_costos_all_lotes_by_period(
                &snapshot.lotes,
                &snapshot.eventos,
                &snapshot.trabajos,
                periodo,
                clock,
            ),
            proveedores: compute_gasto_por_proveedor(&snapshot.compras, periodo, clock),
            build: build_info::current().describe(),
        };
        tracing::info!(
            inversion = reporte.resumen.inversion_total,
            eventos = reporte.actividad.total_eventos,
            "bank report generated"
        );
        Ok(reporte)
    }
}
