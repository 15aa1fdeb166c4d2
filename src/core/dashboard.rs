//! Dashboard rollups over purchases and contractor jobs: supplier spend,
//! monthly cashflow and spend by product category.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    core::{
        meses::{mes_key, mes_label},
        periodo::{activos_en, fechados_en, get_period_range, rango_utc, Periodo, RangoFechas},
    },
    domain::{CategoriaProducto, Compra, Moneda, Producto, TrabajoContratista},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveedorGastoItem {
    pub proveedor_id: String,
    pub proveedor_name: String,
    #[serde(rename = "totalARS")]
    pub total_ars: f64,
    #[serde(rename = "totalUSD")]
    pub total_usd: f64,
    pub cantidad_compras: usize,
    /// Share of the ARS spend across all suppliers. USD is not weighted in.
    pub porcentaje: f64,
}

/// Spend per supplier in the period, largest ARS spend first.
///
/// Purchase dates are read as local midnight and compared against the local
/// period bounds.
pub fn compute_gasto_por_proveedor(
    compras: &[Compra],
    periodo: Periodo,
    clock: &dyn Clock,
) -> Vec<ProveedorGastoItem> {
    let range = get_period_range(periodo, clock);
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut items: Vec<ProveedorGastoItem> = Vec::new();

    for compra in compras
        .iter()
        .filter(|compra| range.as_ref().map_or(true, |r| r.contains_local(&compra.fecha)))
    {
        let slot = *index.entry(compra.proveedor_id.as_str()).or_insert_with(|| {
            items.push(ProveedorGastoItem {
                proveedor_id: compra.proveedor_id.clone(),
                proveedor_name: compra.proveedor_name.clone(),
                total_ars: 0.0,
                total_usd: 0.0,
                cantidad_compras: 0,
                porcentaje: 0.0,
            });
            items.len() - 1
        });
        let item = &mut items[slot];
        match compra.moneda {
            Moneda::Ars => item.total_ars += compra.total,
            Moneda::Usd => item.total_usd += compra.total,
        }
        item.cantidad_compras += 1;
    }

    let total_global_ars: f64 = items.iter().map(|item| item.total_ars).sum();
    if total_global_ars > 0.0 {
        for item in &mut items {
            item.porcentaje = item.total_ars / total_global_ars * 100.0;
        }
    }

    items.sort_by(|a, b| b.total_ars.total_cmp(&a.total_ars));
    items
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowMensualItem {
    pub mes: String,
    pub mes_key: u32,
    /// Income tracking does not exist yet; always zero.
    pub ingresos: f64,
    pub egresos_compras: f64,
    pub egresos_trabajos: f64,
    pub egresos_total: f64,
    pub neto: f64,
}

impl CashflowMensualItem {
    fn empty(mes_key: u32) -> Self {
        Self {
            mes: mes_label(mes_key),
            mes_key,
            ingresos: 0.0,
            egresos_compras: 0.0,
            egresos_trabajos: 0.0,
            egresos_total: 0.0,
            neto: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowSummary {
    pub moneda: Moneda,
    pub mensual: Vec<CashflowMensualItem>,
    pub total_ingresos: f64,
    pub total_egresos: f64,
    pub saldo_neto: f64,
}

/// Monthly outflows in one currency, oldest month first.
///
/// Contractor jobs are billed in ARS, so they never appear in a USD cashflow.
/// Jobs without a field still count here.
pub fn compute_cashflow(
    compras: &[Compra],
    trabajos: &[TrabajoContratista],
    periodo: Periodo,
    moneda: Moneda,
    clock: &dyn Clock,
) -> CashflowSummary {
    let rango = rango_utc(periodo, clock);
    let (compras, trabajos) = filtrar_por_moneda(compras, trabajos, moneda, rango.as_ref());

    let mut meses: BTreeMap<u32, CashflowMensualItem> = BTreeMap::new();
    for compra in compras {
        let key = mes_key(&compra.fecha);
        meses
            .entry(key)
            .or_insert_with(|| CashflowMensualItem::empty(key))
            .egresos_compras += compra.total;
    }
    for trabajo in trabajos {
        let key = mes_key(&trabajo.fecha);
        meses
            .entry(key)
            .or_insert_with(|| CashflowMensualItem::empty(key))
            .egresos_trabajos += trabajo.costo;
    }

    let mensual: Vec<CashflowMensualItem> = meses
        .into_values()
        .map(|mut item| {
            item.egresos_total = item.egresos_compras + item.egresos_trabajos;
            item.neto = item.ingresos - item.egresos_total;
            item
        })
        .collect();

    let total_ingresos = mensual.iter().map(|item| item.ingresos).sum::<f64>();
    let total_egresos = mensual.iter().map(|item| item.egresos_total).sum::<f64>();
    CashflowSummary {
        moneda,
        mensual,
        total_ingresos,
        total_egresos,
        saldo_neto: total_ingresos - total_egresos,
    }
}

/// Spend split by product category, plus contractor work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GastosPorCategoria {
    pub semilla: f64,
    pub fertilizante: f64,
    pub herbicida: f64,
    pub insecticida: f64,
    pub fungicida: f64,
    pub combustible: f64,
    pub veterinario: f64,
    pub otro: f64,
    pub contratistas: f64,
    pub total: f64,
}

impl GastosPorCategoria {
    pub fn add(&mut self, categoria: CategoriaProducto, monto: f64) {
        *self.slot(categoria) += monto;
        self.total += monto;
    }

    pub fn add_contratistas(&mut self, monto: f64) {
        self.contratistas += monto;
        self.total += monto;
    }

    pub fn get(&self, categoria: CategoriaProducto) -> f64 {
        match categoria {
            CategoriaProducto::Semilla => self.semilla,
            CategoriaProducto::Fertilizante => self.fertilizante,
            CategoriaProducto::Herbicida => self.herbicida,
            CategoriaProducto::Insecticida => self.insecticida,
            CategoriaProducto::Fungicida => self.fungicida,
            CategoriaProducto::Combustible => self.combustible,
            CategoriaProducto::Veterinario => self.veterinario,
            CategoriaProducto::Otro => self.otro,
        }
    }

    fn slot(&mut self, categoria: CategoriaProducto) -> &mut f64 {
        match categoria {
            CategoriaProducto::Semilla => &mut self.semilla,
            CategoriaProducto::Fertilizante => &mut self.fertilizante,
            CategoriaProducto::Herbicida => &mut self.herbicida,
            CategoriaProducto::Insecticida => &mut self.insecticida,
            CategoriaProducto::Fungicida => &mut self.fungicida,
            CategoriaProducto::Combustible => &mut self.combustible,
            CategoriaProducto::Veterinario => &mut self.veterinario,
            CategoriaProducto::Otro => &mut self.otro,
        }
    }

    fn merge(&mut self, other: &GastosPorCategoria) {
        for categoria in CategoriaProducto::ALL {
            *self.slot(categoria) += other.get(categoria);
        }
        self.contratistas += other.contratistas;
        self.total += other.total;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GastoCategoriaMensual {
    pub mes: String,
    pub mes_key: u32,
    #[serde(flatten)]
    pub gastos: GastosPorCategoria,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolucionGastosSummary {
    pub moneda: Moneda,
    pub mensual: Vec<GastoCategoriaMensual>,
    /// Category totals over the whole period.
    pub totales: GastosPorCategoria,
    pub total_periodo: f64,
    pub promedio_mensual: f64,
}

/// Monthly spend per product category, oldest month first.
///
/// Purchase items are classified through the product catalogue; unknown or
/// uncategorised products land in `otro`.
pub fn compute_evolucion_gastos(
    compras: &[Compra],
    trabajos: &[TrabajoContratista],
    productos: &[Producto],
    periodo: Periodo,
    moneda: Moneda,
    clock: &dyn Clock,
) -> EvolucionGastosSummary {
    let categorias: HashMap<&str, CategoriaProducto> = productos
        .iter()
        .filter_map(|producto| producto.categoria.map(|cat| (producto.id.as_str(), cat)))
        .collect();

    let rango = rango_utc(periodo, clock);
    let (compras, trabajos) = filtrar_por_moneda(compras, trabajos, moneda, rango.as_ref());

    let mut meses: BTreeMap<u32, GastosPorCategoria> = BTreeMap::new();
    for compra in compras {
        let bucket = meses.entry(mes_key(&compra.fecha)).or_default();
        for item in &compra.items {
            let categoria = categorias
                .get(item.producto_id.as_str())
                .copied()
                .unwrap_or(CategoriaProducto::Otro);
            bucket.add(categoria, item.subtotal);
        }
    }
    for trabajo in trabajos {
        meses
            .entry(mes_key(&trabajo.fecha))
            .or_default()
            .add_contratistas(trabajo.costo);
    }

    let mut totales = GastosPorCategoria::default();
    let mensual: Vec<GastoCategoriaMensual> = meses
        .into_iter()
        .map(|(key, gastos)| {
            totales.merge(&gastos);
            GastoCategoriaMensual {
                mes: mes_label(key),
                mes_key: key,
                gastos,
            }
        })
        .collect();

    let total_periodo = totales.total;
    let promedio_mensual = if mensual.is_empty() {
        0.0
    } else {
        (total_periodo / mensual.len() as f64).round()
    };

    EvolucionGastosSummary {
        moneda,
        mensual,
        totales,
        total_periodo,
        promedio_mensual,
    }
}

/// Purchases in `moneda` and, for ARS only, active contractor jobs, both
/// restricted to `rango`.
fn filtrar_por_moneda<'a>(
    compras: &'a [Compra],
    trabajos: &'a [TrabajoContratista],
    moneda: Moneda,
    rango: Option<&RangoFechas>,
) -> (Vec<&'a Compra>, Vec<&'a TrabajoContratista>) {
    let compras = fechados_en(compras, rango)
        .into_iter()
        .filter(|compra| compra.moneda == moneda)
        .collect();
    let trabajos = match moneda {
        Moneda::Ars => activos_en(trabajos, rango),
        Moneda::Usd => Vec::new(),
    };
    (compras, trabajos)
}
