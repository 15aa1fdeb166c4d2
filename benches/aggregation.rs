use agro_core::{
    clock::FixedClock,
    core::{
        comparativa::compute_comparativa,
        dashboard::{compute_cashflow, compute_evolucion_gastos},
        imputacion::{compute_costos_all_lotes, compute_costos_all_lotes_by_period},
        Periodo,
    },
    domain::{
        Campana, CategoriaProducto, Compra, CompraItem, Evento, Lote, Moneda, Producto,
        TipoEvento, TipoTrabajo, TrabajoContratista,
    },
    storage::Snapshot,
};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_sample_snapshot(lote_count: usize, record_count: usize) -> Snapshot {
    let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let fecha = |idx: usize| {
        (start + Duration::days((idx % 730) as i64))
            .format("%Y-%m-%d")
            .to_string()
    };

    let lotes = (0..lote_count)
        .map(|idx| {
            Lote::new(
                format!("lote-{idx}"),
                format!("Lote {idx}"),
                10.0 + (idx % 90) as f64,
            )
        })
        .collect();
    let eventos = (0..record_count)
        .map(|idx| {
            Evento::new(
                format!("ev-{idx}"),
                format!("lote-{}", idx % lote_count),
                fecha(idx),
                TipoEvento::ALL[idx % TipoEvento::ALL.len()],
                1_000.0 + (idx % 500) as f64,
            )
        })
        .collect();
    let trabajos = (0..record_count / 2)
        .map(|idx| {
            let lote = format!("lote-{}", idx % lote_count);
            TrabajoContratista::new(
                format!("tr-{idx}"),
                (idx % 7 != 0).then_some(lote.as_str()),
                fecha(idx),
                TipoTrabajo::Cosecha,
                "Contratista",
                5_000.0,
            )
        })
        .collect();
    let compras = (0..record_count / 2)
        .map(|idx| {
            let moneda = if idx % 5 == 0 { Moneda::Usd } else { Moneda::Ars };
            Compra::new(
                format!("co-{idx}"),
                format!("prov-{}", idx % 40),
                "Proveedor",
                fecha(idx),
                moneda,
                vec![CompraItem::new(format!("prod-{}", idx % 100), 10.0, 250.0)],
            )
        })
        .collect();
    let productos = (0..100)
        .map(|idx| {
            Producto::new(
                format!("prod-{idx}"),
                format!("Producto {idx}"),
                Some(CategoriaProducto::ALL[idx % CategoriaProducto::ALL.len()]),
            )
        })
        .collect();

    Snapshot {
        lotes,
        eventos,
        trabajos,
        compras,
        productos,
    }
}

fn bench_aggregation(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(200, 20_000);
    let clock = FixedClock::parse("2026-06-30T12:00:00-03:00").unwrap();
    let campanas = vec![
        Campana {
            id: "a".into(),
            nombre: "24/25".into(),
            fecha_inicio: "2024-07-01".into(),
            fecha_fin: "2025-06-30".into(),
        },
        Campana {
            id: "b".into(),
            nombre: "25/26".into(),
            fecha_inicio: "2025-07-01".into(),
            fecha_fin: "2026-06-30".into(),
        },
    ];

    c.bench_function("costos_all_lotes_20k", |b| {
        b.iter(|| {
            compute_costos_all_lotes(
                black_box(&snapshot.lotes),
                black_box(&snapshot.eventos),
                black_box(&snapshot.trabajos),
            )
        })
    });

    c.bench_function("costos_by_period_last6_20k", |b| {
        b.iter(|| {
            compute_costos_all_lotes_by_period(
                &snapshot.lotes,
                &snapshot.eventos,
                &snapshot.trabajos,
                black_box(Periodo::Last6),
                &clock,
            )
        })
    });

    c.bench_function("cashflow_ars_10k", |b| {
        b.iter(|| {
            compute_cashflow(
                &snapshot.compras,
                &snapshot.trabajos,
                Periodo::All,
                black_box(Moneda::Ars),
                &clock,
            )
        })
    });

    c.bench_function("evolucion_gastos_10k", |b| {
        b.iter(|| {
            compute_evolucion_gastos(
                &snapshot.compras,
                &snapshot.trabajos,
                &snapshot.productos,
                Periodo::ThisYear,
                Moneda::Ars,
                &clock,
            )
        })
    });

    c.bench_function("comparativa_two_campaigns", |b| {
        b.iter(|| {
            compute_comparativa(
                black_box(&campanas),
                &snapshot.lotes,
                &snapshot.eventos,
                &snapshot.trabajos,
            )
        })
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
