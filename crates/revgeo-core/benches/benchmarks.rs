// crates/revgeo-core/benches/benchmarks.rs
use criterion::{criterion_group, criterion_main, Criterion};
use revgeo_core::distance::haversine_km;
use revgeo_core::{CityDb, CityLocator, NearestSearch, Place};
use std::hint::black_box;

/// Roughly the size of the GeoNames `cities500` export.
const PLACES: usize = 200_000;

fn synthetic_db() -> CityDb {
    // Deterministic spread over the globe.
    (0..PLACES)
        .map(|i| {
            let lat = ((i * 7919) % 18_000) as f64 / 100.0 - 90.0;
            let lng = ((i * 104_729) % 36_000) as f64 / 100.0 - 180.0;
            Place::new(format!("place-{i}"), "ZZ", lat, lng)
        })
        .collect()
}

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| haversine_km(black_box(51.5), black_box(-0.1), black_box(48.85), black_box(2.35)))
    });
}

fn bench_nearest(c: &mut Criterion) {
    let db = synthetic_db();
    c.bench_function("nearest_linear_scan_200k", |b| {
        b.iter(|| db.nearest(black_box(51.5), black_box(-0.1)))
    });

    let locator = CityLocator::from_db(db);
    c.bench_function("locator_find_nearest_200k", |b| {
        b.iter(|| locator.find_nearest(black_box(-33.86), black_box(151.21)))
    });
}

criterion_group!(benches, bench_haversine, bench_nearest);
criterion_main!(benches);
