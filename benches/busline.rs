use busline::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, sync::Arc, time::Duration};

const GRID: usize = 24;
const SEGMENT: Distance = Distance::from_meters(400.0);

fn stop_name(row: usize, col: usize) -> String {
    format!("Stop {row}-{col}")
}

/// A square grid of stops with one linear route per row and per column.
fn grid_catalogue() -> Catalogue {
    let mut builder = Catalogue::builder();
    for row in 0..GRID {
        for col in 0..GRID {
            let coordinate = Coordinate::from((55.5 + row as f64 * 0.004, 37.5 + col as f64 * 0.006));
            builder.add_stop(&stop_name(row, col), coordinate);
            if col > 0 {
                builder.set_road_distance(&stop_name(row, col - 1), &stop_name(row, col), SEGMENT);
            }
            if row > 0 {
                builder.set_road_distance(&stop_name(row - 1, col), &stop_name(row, col), SEGMENT);
            }
        }
    }
    for line in 0..GRID {
        let across: Vec<String> = (0..GRID).map(|col| stop_name(line, col)).collect();
        let down: Vec<String> = (0..GRID).map(|row| stop_name(row, line)).collect();
        builder.add_route(&format!("H{line}"), &across, false);
        builder.add_route(&format!("V{line}"), &down, false);
    }
    builder.build().expect("Failed to build grid catalogue")
}

fn short_solve(router: &TransitRouter) {
    let from = stop_name(3, 3);
    let to = stop_name(5, 4);
    let _ = black_box(router.find_route(&from, &to));
}

fn long_solve(router: &TransitRouter) {
    let from = stop_name(0, 0);
    let to = stop_name(GRID - 1, GRID - 1);
    let _ = black_box(router.find_route(&from, &to));
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalogue = Arc::new(grid_catalogue());
    let settings = RoutingSettings::default();
    let router =
        TransitRouter::new(catalogue.clone(), settings).expect("Failed to build routing graph");

    let mut group = c.benchmark_group("Routing");

    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Graph build", |b| {
        b.iter(|| black_box(TransitRouter::new(catalogue.clone(), settings)))
    });

    group.bench_function("Short route solve", |b| b.iter(|| short_solve(&router)));

    group.bench_function("Long route solve", |b| b.iter(|| long_solve(&router)));

    group.bench_function("Route statistics", |b| {
        b.iter(|| black_box(catalogue.all_route_info()))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
