use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dupscan::fixture::generate_catalog;
use dupscan::{CountingScan, DuplicateFinder, NaiveScan};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate_detection");
    let dup_rate = 0.2;

    for &n in &[100usize, 400, 1600] {
        // Fresh seed per size so catalogs are stable across runs.
        let titles = generate_catalog(n as u64, n, dup_rate);
        let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();

        group.bench_with_input(BenchmarkId::new("naive_scan", n), &refs, |b, refs| {
            b.iter(|| NaiveScan.find_duplicates(black_box(refs)))
        });
        group.bench_with_input(BenchmarkId::new("counting_scan", n), &refs, |b, refs| {
            b.iter(|| CountingScan.find_duplicates(black_box(refs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
