//! Performance benchmarks for fse_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fse_core::matching::{match_jobs, AircraftRecord, JobAssignment, JobFilter};
use fse_core::ranking::rank_and_annotate;
use fse_core::test_helpers::{aircraft, assignment, sample_directory};

const AIRPORTS: [&str; 6] = ["KJFK", "KLAX", "KORD", "LFPG", "EGLL", "EDDF"];

fn fleet(size: usize) -> Vec<AircraftRecord> {
    (0..size)
        .map(|i| aircraft(&format!("{}", 1000 + i), AIRPORTS[i % AIRPORTS.len()]))
        .collect()
}

fn offers(count: usize, fleet_size: usize) -> Vec<JobAssignment> {
    (0..count)
        .map(|i| {
            let origin = AIRPORTS[i % AIRPORTS.len()];
            let destination = AIRPORTS[(i * 7 + 1) % AIRPORTS.len()];
            let aircraft_id = if i % 3 == 0 {
                "0".to_string()
            } else {
                format!("{}", 1000 + i % fleet_size)
            };
            assignment(origin, destination, &aircraft_id, (i * 37 % 5000) as f64, "1 day")
        })
        .collect()
}

fn bench_match_and_rank(c: &mut Criterion) {
    let directory = sample_directory();
    let filter = JobFilter::default();
    let scenarios = vec![("small", 10, 500), ("medium", 50, 5_000), ("large", 200, 50_000)];

    let mut group = c.benchmark_group("match_and_rank");
    for (name, fleet_size, job_count) in scenarios {
        let roster = fleet(fleet_size);
        let jobs = offers(job_count, fleet_size);
        group.bench_with_input(BenchmarkId::from_parameter(name), &(), |b, _| {
            b.iter(|| {
                let matched = match_jobs(&roster, &jobs, &directory, &filter, None);
                black_box(rank_and_annotate(matched, 25, &directory))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_match_and_rank);
criterion_main!(benches);
