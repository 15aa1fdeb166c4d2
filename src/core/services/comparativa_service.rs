use serde::{Deserialize, Serialize};

use crate::{
    core::{
        campanas::CampanaStore,
        comparativa::{
            build_categorias_chart_data, build_comparativa_chart_data, compute_comparativa,
            CategoriasChart, ComparativaCampanaData, ComparativaChart, MetricaComparativa,
        },
    },
    errors::{AgroError, Result},
    storage::DataSource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativaView {
    pub campanas: Vec<ComparativaCampanaData>,
    pub chart_lotes: ComparativaChart,
    pub chart_categorias: CategoriasChart,
}

pub struct ComparativaService;

impl ComparativaService {
    /// Compares the selected campaigns in selection order.
    #[tracing::instrument(skip(source, store))]
    pub fn comparar(
        source: &dyn DataSource,
        store: &CampanaStore,
        ids: &[&str],
        metrica: MetricaComparativa,
    ) -> Result<ComparativaView> {
        if ids.is_empty() {
            return Err(AgroError::Validation(
                "select at least one campaign to compare".into(),
            ));
        }
        let campanas = store.select(ids)?;
        let snapshot = source.snapshot()?;
        let data = compute_comparativa(
            &campanas,
            &snapshot.lotes,
            &snapshot.eventos,
            &snapshot.trabajos,
        );
        Ok(ComparativaView {
            chart_lotes: build_comparativa_chart_data(&data, metrica),
            chart_categorias: build_categorias_chart_data(&data),
            campanas: data,
        })
    }
}
