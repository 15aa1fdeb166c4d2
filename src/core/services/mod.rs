pub mod comparativa_service;
pub mod dashboard_service;
pub mod reporte_service;

pub use comparativa_service::{ComparativaService, ComparativaView};
pub use dashboard_service::{DashboardService, DashboardView, LoteDetalle};
pub use reporte_service::{ReporteBancario, ReporteBancarioService};
