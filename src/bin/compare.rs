use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dupscan::measure::{self, TimingConfig};
use dupscan::{
    CountingScan, DuplicateFinder, NaiveScan, find_duplicate_titles, lines,
    optimized_find_duplicate_titles, profile,
};

fn print_duplicates(found: &[String]) {
    println!("Found {} duplicate movies:", found.len());
    println!("{}", found.join("\n"));
}

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("movies.txt"));

    let titles = lines::read_titles(&path)
        .with_context(|| format!("reading movie list {}", path.display()))?;
    let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();

    println!("--- before optimization ---");
    print_duplicates(&NaiveScan.find_duplicates(&refs));

    println!("\n--- after optimization ---");
    print_duplicates(&CountingScan.find_duplicates(&refs));

    // The timed entry points read the file themselves, so each sample covers
    // the whole run the way a user experiences it.
    let config = TimingConfig::default();

    println!("\n--- timing, before optimization ---");
    let report = measure::time_cost("find_duplicate_titles", &config, || {
        find_duplicate_titles(&path)
    });
    println!("{report}");

    println!("\n--- timing, after optimization ---");
    let report = measure::time_cost("optimized_find_duplicate_titles", &config, || {
        optimized_find_duplicate_titles(&path)
    });
    println!("{report}");

    println!("\n--- profile, before optimization ---");
    let (_, report) = profile::profiled(|| NaiveScan.find_duplicates(&refs));
    println!("{report}");

    println!("\n--- profile, after optimization ---");
    let (_, report) = profile::profiled(|| CountingScan.find_duplicates(&refs));
    println!("{report}");

    Ok(())
}
