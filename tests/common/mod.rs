#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use agro_core::{
    clock::FixedClock,
    domain::{
        CategoriaProducto, Compra, CompraItem, Evento, EventoInsumo, Lote, Moneda, Producto,
        TipoEvento, TipoTrabajo, TrabajoContratista,
    },
    storage::Snapshot,
};
use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh directory that survives until the test binary exits.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Mid-March 2026, Buenos Aires time.
pub fn clock() -> FixedClock {
    FixedClock::parse("2026-03-15T10:00:00-03:00").expect("valid timestamp")
}

pub fn soft_deleted_evento(id: &str, lote_id: &str, fecha: &str, costo: f64) -> Evento {
    let mut evento = Evento::new(id, lote_id, fecha, TipoEvento::Fertilizacion, costo);
    evento.deleted_at = Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
    evento
}

pub fn soft_deleted_trabajo(
    id: &str,
    lote_id: Option<&str>,
    fecha: &str,
    costo: f64,
) -> TrabajoContratista {
    let mut trabajo =
        TrabajoContratista::new(id, lote_id, fecha, TipoTrabajo::Labranza, "Borrado SRL", costo);
    trabajo.deleted_at = Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
    trabajo
}

pub fn compra(
    id: &str,
    proveedor: &str,
    fecha: &str,
    moneda: Moneda,
    items: Vec<CompraItem>,
) -> Compra {
    Compra::new(id, proveedor, format!("Proveedor {proveedor}"), fecha, moneda, items)
}

/// A small farm: three fields, a season of events, jobs and purchases.
pub fn farm_snapshot() -> Snapshot {
    let lotes = vec![
        Lote::new("norte", "Lote Norte", 100.0),
        Lote::new("sur", "Lote Sur", 50.0),
        Lote::new("bajo", "Bajo Inundable", 0.0),
    ];

    let eventos = vec![
        Evento::new("ev-1", "norte", "2025-11-10", TipoEvento::Siembra, 300_000.0).with_insumo(
            EventoInsumo {
                producto_id: "soja".into(),
                producto_nombre: "Soja DM 46".into(),
                cantidad: 6_000.0,
                precio_unitario: 50.0,
                subtotal: 300_000.0,
            },
        ),
        Evento::new("ev-2", "norte", "2026-02-05", TipoEvento::Pulverizacion, 120_000.0),
        Evento::new("ev-3", "sur", "2026-03-02", TipoEvento::Pulverizacion, 40_000.0),
        Evento::new("ev-4", "bajo", "2026-03-03", TipoEvento::Monitoreo, 10_000.0),
        soft_deleted_evento("ev-5", "sur", "2026-03-04", 999_999.0),
    ];

    let trabajos = vec![
        TrabajoContratista::new(
            "tr-1",
            Some("norte"),
            "2026-03-01",
            TipoTrabajo::Cosecha,
            "Cosechas del Oeste",
            80_000.0,
        ),
        TrabajoContratista::new(
            "tr-2",
            Some("sur"),
            "2025-12-20",
            TipoTrabajo::Siembra,
            "Siembras SRL",
            25_000.0,
        ),
        TrabajoContratista::new(
            "tr-3",
            None,
            "2026-03-05",
            TipoTrabajo::Flete,
            "Transportes Ruta 5",
            15_000.0,
        ),
        soft_deleted_trabajo("tr-4", Some("norte"), "2026-03-06", 777_777.0),
    ];

    let compras = vec![
        compra(
            "co-1",
            "semillero",
            "2025-10-20",
            Moneda::Ars,
            vec![CompraItem::new("soja", 6_000.0, 50.0)],
        ),
        compra(
            "co-2",
            "agroquimica",
            "2026-02-01",
            Moneda::Ars,
            vec![
                CompraItem::new("glifo", 100.0, 1_000.0),
                CompraItem::new("desconocido", 1.0, 5_000.0),
            ],
        ),
        compra(
            "co-3",
            "agroquimica",
            "2026-03-10",
            Moneda::Usd,
            vec![CompraItem::new("urea", 10.0, 80.0)],
        ),
        compra(
            "co-4",
            "estacion",
            "2026-03-12",
            Moneda::Ars,
            vec![CompraItem::new("gasoil", 500.0, 100.0)],
        ),
    ];

    let productos = vec![
        Producto::new("soja", "Soja DM 46", Some(CategoriaProducto::Semilla)),
        Producto::new("glifo", "Glifosato", Some(CategoriaProducto::Herbicida)),
        Producto::new("urea", "Urea", Some(CategoriaProducto::Fertilizante)),
        Producto::new("gasoil", "Gasoil", None),
    ];

    Snapshot {
        lotes,
        eventos,
        trabajos,
        compras,
        productos,
    }
}
