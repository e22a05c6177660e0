use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use node_manager::app::use_cases::{editing, file_io, history};
use node_manager::AppState;
use std::fmt::Write as _;
use std::hint::black_box;

fn bench_csv_import(c: &mut Criterion) {
    let coords = include_str!("../tests/fixtures/nodeData.csv");
    let connections = include_str!("../tests/fixtures/nodeConnections.csv");

    c.bench_function("csv_import_fixture", |b| {
        b.iter(|| {
            let mut state = AppState::new();
            let report = file_io::import_graph(
                &mut state,
                black_box(coords.as_bytes()),
                black_box(connections.as_bytes()),
            )
            .expect("CSV import failed");
            black_box(report.nodes)
        })
    });
}

/// Gitter aus `node_count` Nodes, jeder mit rechtem und unterem Nachbarn verbunden
fn build_synthetic_csv(node_count: usize) -> (String, String) {
    let width = 1000usize;
    let mut coords = String::from("id,x,y\n-1,0,0\n");
    let mut connections = String::from("id,neighbors\n");

    for index in 0..node_count {
        let x = (index % width) as f64 * 1.5;
        let y = (index / width) as f64 * 1.5;
        let _ = writeln!(coords, "{},{},{}", index, x, y);

        let _ = write!(connections, "{}", index);
        if (index + 1) % width != 0 && index + 1 < node_count {
            let _ = write!(connections, ",{}", index + 1);
        }
        if index + width < node_count {
            let _ = write!(connections, ",{}", index + width);
        }
        connections.push('\n');
    }
    let rows = node_count.div_ceil(width);
    let _ = writeln!(coords, "-2,{},{}", width as f64 * 1.5, rows as f64 * 1.5);

    (coords, connections)
}

fn bench_synthetic_import_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_roundtrip");

    for &node_count in &[10_000usize, 100_000usize] {
        let (coords, connections) = build_synthetic_csv(node_count);

        group.bench_with_input(
            BenchmarkId::new("import", node_count),
            &(coords.as_str(), connections.as_str()),
            |b, (coords, connections)| {
                b.iter(|| {
                    let mut state = AppState::new();
                    let report =
                        file_io::import_graph(&mut state, coords.as_bytes(), connections.as_bytes())
                            .expect("CSV import failed");
                    black_box(report.connections)
                })
            },
        );

        let mut state = AppState::new();
        file_io::import_graph(&mut state, coords.as_bytes(), connections.as_bytes())
            .expect("CSV import failed");

        group.bench_with_input(BenchmarkId::new("export", node_count), &state, |b, state| {
            b.iter(|| {
                let mut out = Vec::with_capacity(coords.len());
                file_io::export_coords(state, &mut out).expect("export failed");
                file_io::export_connections(state, &mut out).expect("export failed");
                black_box(out.len())
            })
        });
    }

    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    let (coords, connections) = build_synthetic_csv(10_000);
    let mut base = AppState::new();
    file_io::import_graph(&mut base, coords.as_bytes(), connections.as_bytes())
        .expect("CSV import failed");

    c.bench_function("undo_redo_delete_100", |b| {
        b.iter_batched(
            || {
                let mut state = base.clone();
                for id in 0..100 {
                    editing::delete_node(&mut state, id * 50).expect("delete failed");
                }
                state
            },
            |mut state| {
                while history::undo(&mut state).expect("undo failed") {}
                while history::redo(&mut state).expect("redo failed") {}
                black_box(state.registry.len())
            },
            criterion::BatchSize::LargeInput,
        )
    });

    c.bench_function("create_and_connect_1000", |b| {
        b.iter(|| {
            let mut state = AppState::new();
            let mut previous = editing::create_node(&mut state, DVec2::ZERO).expect("create failed");
            for i in 1..1000 {
                let id = editing::create_node(&mut state, DVec2::splat(i as f64))
                    .expect("create failed");
                editing::connect(&mut state, previous, id).expect("connect failed");
                previous = id;
            }
            black_box(state.history.len())
        })
    });
}

criterion_group!(
    core_benches,
    bench_csv_import,
    bench_synthetic_import_export,
    bench_undo_redo
);
criterion_main!(core_benches);
