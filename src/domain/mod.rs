//! Farm records as handed over by the persistence collaborator.

pub mod campana;
pub mod common;
pub mod compra;
pub mod evento;
pub mod lote;
pub mod producto;
pub mod trabajo;

pub use campana::Campana;
pub use common::{find_by_id, Fechado, Identifiable, Moneda, SoftDeletable};
pub use compra::{Compra, CompraItem};
pub use evento::{Evento, EventoInsumo, TipoEvento};
pub use lote::Lote;
pub use producto::{CategoriaProducto, Producto};
pub use trabajo::{TipoTrabajo, TrabajoContratista};
