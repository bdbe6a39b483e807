// NaiveScan: explanatory notes
//
// The baseline strategy mirrors the pencil-and-paper procedure: take the next
// title off the working list and look through everything still left for a
// case-insensitive match. Every membership test lowercases both sides again,
// so a list of n titles costs O(n^2) comparisons and O(n^2) temporary string
// allocations. `CountingScan` shows how much of that is avoidable; this
// implementation is the reference point the measurements are judged against,
// so it stays exactly this blunt.

use crate::core::{DuplicateFinder, normalize_title};
use crate::profile;

/// Baseline quadratic strategy: repeated linear scans over the remaining titles.
pub struct NaiveScan;

impl NaiveScan {
    /// True if `title` matches any entry of `remaining` case-insensitively.
    fn is_duplicate(title: &str, remaining: &[&str]) -> bool {
        let _span = profile::span("scan::is_duplicate");
        remaining
            .iter()
            .any(|other| normalize_title(other) == normalize_title(title))
    }
}

impl DuplicateFinder for NaiveScan {
    fn name(&self) -> &'static str {
        "naive_scan"
    }

    fn find_duplicates(&self, titles: &[&str]) -> Vec<String> {
        let _span = profile::span("scan::find_duplicates");
        let mut remaining: Vec<&str> = titles.to_vec();
        let mut duplicates: Vec<String> = Vec::new();

        // Drain from the front so the casing recorded for a duplicate is the
        // first one encountered in the input. The already-recorded check is a
        // linear scan as well; a title seen three times is still reported once.
        while !remaining.is_empty() {
            let title = remaining.remove(0);
            if Self::is_duplicate(title, &remaining)
                && !duplicates
                    .iter()
                    .any(|seen| normalize_title(seen) == normalize_title(title))
            {
                duplicates.push(title.to_string());
            }
        }

        duplicates
    }
}
