use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spa_topocentric::{Observation, spa};
use std::hint::black_box;

fn golden_observation() -> Observation {
    Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
        .with_time(12, 30, 30.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0)
}

fn benchmark_single_calculation(c: &mut Criterion) {
    let observation = golden_observation();

    c.bench_function("spa_single", |b| {
        b.iter(|| spa::solar_position(black_box(&observation)));
    });

    c.bench_function("spa_single_checked", |b| {
        b.iter(|| spa::checked_solar_position(black_box(&observation)).unwrap());
    });

    let estimated = Observation {
        delta_t: None,
        ..observation
    };
    c.bench_function("spa_single_estimated_delta_t", |b| {
        b.iter(|| spa::solar_position(black_box(&estimated)));
    });
}

fn benchmark_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    for step_minutes in [60_u32, 10, 1] {
        let observations: Vec<Observation> = (0..24 * 60)
            .step_by(step_minutes as usize)
            .map(|minute_of_day: u32| {
                golden_observation().with_time(minute_of_day / 60, minute_of_day % 60, 0.0)
            })
            .collect();

        group.throughput(Throughput::Elements(observations.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{step_minutes}min")),
            &observations,
            |b, observations| {
                b.iter(|| {
                    for observation in observations {
                        black_box(spa::solar_position(observation));
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_coordinate_sweep(c: &mut Criterion) {
    let observations: Vec<Observation> = (-8..=8)
        .flat_map(|lat| (-18..=18).map(move |lon| (f64::from(lat) * 10.0, f64::from(lon) * 10.0)))
        .map(|(latitude, longitude)| Observation {
            latitude,
            longitude,
            ..golden_observation()
        })
        .collect();

    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");
    group.throughput(Throughput::Elements(observations.len() as u64));
    group.bench_function("10deg_grid", |b| {
        b.iter(|| {
            for observation in &observations {
                black_box(spa::solar_position(observation));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series,
    benchmark_coordinate_sweep
);
criterion_main!(benches);
