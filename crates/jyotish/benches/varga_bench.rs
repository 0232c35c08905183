use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jyotish::vedic::vargas::{transform_longitude, ALL_CHART_TYPES};

fn bench_transform_longitude(c: &mut Criterion) {
    let longitudes: Vec<f64> = (0..360).map(|i| i as f64 + 0.37).collect();

    c.bench_function("transform_longitude_all_vargas", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for chart_type in ALL_CHART_TYPES {
                for lon in &longitudes {
                    acc += transform_longitude(black_box(chart_type), black_box(*lon));
                }
            }
            acc
        })
    });
}

criterion_group!(benches, bench_transform_longitude);
criterion_main!(benches);
