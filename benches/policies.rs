use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{PolicyKind, ReferenceString, SimulationConfig, Simulator};

/// Deterministic stream with some locality: a sliding window plus noise.
fn synthetic_refs(len: usize) -> ReferenceString {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let pages: Vec<i64> = (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let base = (i / 64) as i64;
            base + (state % 16) as i64
        })
        .collect();
    ReferenceString::from(pages)
}

fn bench_policies(c: &mut Criterion) {
    let refs = synthetic_refs(10_000);
    let mut group = c.benchmark_group("simulate_10k");

    for kind in PolicyKind::ALL {
        let config = SimulationConfig::new(8, kind).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(kind), &config, |b, &config| {
            b.iter(|| {
                let stats = Simulator::new(black_box(&refs), config)
                    .run_with(|_| Ok(()))
                    .unwrap();
                black_box(stats.faults)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
