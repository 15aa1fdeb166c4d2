//! Cost imputation and period aggregation. Every aggregator is a pure function
//! over borrowed slices; services wire them to a [`crate::storage::DataSource`].

pub mod campanas;
pub mod comparativa;
pub mod dashboard;
pub mod imputacion;
pub mod meses;
pub mod periodo;
pub mod reporte_bancario;
pub mod services;

pub use campanas::{CampanaDraft, CampanaStore};
pub use periodo::{get_period_range, PeriodRange, Periodo, RangoFechas};
