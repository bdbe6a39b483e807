// CountingScan: explanatory notes
//
// One pass builds a frequency table keyed by the lowercased form of each
// title; a second pass over the table emits every entry whose count exceeds
// one. Time is O(n) and space is O(k) for k distinct titles, against the
// O(n^2) comparisons of `NaiveScan`. The table also remembers the casing of
// the first occurrence, so both strategies report duplicates spelled the way
// the catalog first spelled them; only iteration order differs (the map is
// unordered, the naive scan keeps input order).

use ahash::AHashMap as HashMap;

use crate::core::{DuplicateFinder, normalize_title};
use crate::profile;

/// Occurrence record for one normalized title.
struct TitleCount {
    first_seen: String,
    count: usize,
}

/// Optimized strategy: single-pass frequency counting over normalized titles.
pub struct CountingScan;

impl CountingScan {
    fn count_titles(titles: &[&str]) -> HashMap<String, TitleCount> {
        let _span = profile::span("counted::count_titles");
        let mut counts: HashMap<String, TitleCount> = HashMap::with_capacity(titles.len());
        for &title in titles {
            counts
                .entry(normalize_title(title))
                .and_modify(|c| c.count += 1)
                .or_insert_with(|| TitleCount {
                    first_seen: title.to_string(),
                    count: 1,
                });
        }
        counts
    }
}

impl DuplicateFinder for CountingScan {
    fn name(&self) -> &'static str {
        "counting_scan"
    }

    fn find_duplicates(&self, titles: &[&str]) -> Vec<String> {
        let _span = profile::span("counted::find_duplicates");
        Self::count_titles(titles)
            .into_iter()
            .filter(|(_, c)| c.count > 1)
            .map(|(_, c)| c.first_seen)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_casing() {
        let dups = CountingScan.find_duplicates(&["The Matrix", "THE MATRIX", "the matrix"]);
        assert_eq!(dups, vec!["The Matrix".to_string()]);
    }

    #[test]
    fn counts_are_per_normalized_title() {
        let counts = CountingScan::count_titles(&["Up", "up", "UP", "Cars"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["up"].count, 3);
        assert_eq!(counts["up"].first_seen, "Up");
        assert_eq!(counts["cars"].count, 1);
    }
}
