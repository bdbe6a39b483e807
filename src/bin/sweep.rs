use std::time::Instant;

use dupscan::fixture::generate_catalog;
use dupscan::{CountingScan, DuplicateFinder, NaiveScan};

fn run_case(n: usize, dup_rate: f64) {
    let titles = generate_catalog(42, n, dup_rate);
    let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();

    let t0 = Instant::now();
    let naive = NaiveScan.find_duplicates(&refs);
    let naive_dur = t0.elapsed();

    let t1 = Instant::now();
    let counted = CountingScan.find_duplicates(&refs);
    let counted_dur = t1.elapsed();

    println!(
        "n={} dup_rate={} naive_time={:?} counted_time={:?} naive_dups={} counted_dups={}",
        n,
        dup_rate,
        naive_dur,
        counted_dur,
        naive.len(),
        counted.len()
    );
}

fn main() {
    env_logger::init();

    let sizes = [250usize, 500, 1000, 2000, 4000];
    let dup_rates = [0.1f64, 0.3];
    for &n in &sizes {
        for &rate in &dup_rates {
            run_case(n, rate);
        }
    }
}
