//! Ranking and heat-map throughput over a fully measured room

use chrono::{TimeZone, Utc};
use comfort_core::{ComfortEngine, ControlSourceConfig, FixedClock, Position, RoomConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn measured_room(columns: u16, rows: u16) -> ComfortEngine<FixedClock> {
    let config = RoomConfig::builder()
        .grid(columns, rows)
        .control_source(ControlSourceConfig::cooling(1, 0, 0))
        .control_source(ControlSourceConfig::heating(2, columns - 1, rows - 1))
        .build()
        .unwrap();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap());
    let mut engine = ComfortEngine::with_clock(config, clock).unwrap();

    for column in 0..columns {
        for row in 0..rows {
            let lux = 200.0 + f64::from((column * 37 + row * 11) % 600);
            let rating = i64::from((column + row) % 5) + 1;
            engine
                .submit_reading(Position::new(column, row), "10:00", lux, rating, None)
                .unwrap();
        }
    }
    engine
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_recommendations");
    for (columns, rows) in [(6u16, 5u16), (20, 15), (60, 40)] {
        let engine = measured_room(columns, rows);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{columns}x{rows}")),
            &engine,
            |b, engine| b.iter(|| engine.ranked_recommendations(black_box("10:00")).unwrap()),
        );
    }
    group.finish();
}

fn bench_heatmap(c: &mut Criterion) {
    let engine = measured_room(20, 15);
    c.bench_function("heatmap_20x15", |b| {
        b.iter(|| engine.heatmap(black_box("10:00")).unwrap())
    });
}

criterion_group!(benches, bench_ranking, bench_heatmap);
criterion_main!(benches);
