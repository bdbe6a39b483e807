pub mod core;
pub mod counted;
pub mod fixture;
pub mod lines;
pub mod measure;
pub mod profile;
pub mod scan;

use std::io;
use std::path::Path;

pub use crate::core::{DuplicateFinder, normalize_title};
pub use crate::counted::CountingScan;
pub use crate::scan::NaiveScan;

/// Read the title list at `path` and report duplicates with the baseline
/// quadratic strategy. Read errors propagate untouched; there is nothing to
/// analyze without input.
pub fn find_duplicate_titles(path: &Path) -> io::Result<Vec<String>> {
    let titles = lines::read_titles(path)?;
    let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();
    Ok(NaiveScan.find_duplicates(&refs))
}

/// Read the title list at `path` and report duplicates with the counting
/// strategy.
pub fn optimized_find_duplicate_titles(path: &Path) -> io::Result<Vec<String>> {
    let titles = lines::read_titles(path)?;
    let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();
    Ok(CountingScan.find_duplicates(&refs))
}
