use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const STEMS: &[&str] = &[
    "Midnight", "Harbor", "Falcon", "Winter", "Paper", "Crimson", "Silent", "Garden", "Iron",
    "Violet", "Copper", "Orchard", "Lantern", "Ember", "Summit", "Meridian", "Hollow", "Saffron",
];

/// Generate a synthetic title catalog with a controlled share of
/// case-shuffled duplicates. Deterministic for a given seed.
///
/// Fresh titles embed their index so they never collide by accident; every
/// duplicate is an earlier entry re-emitted with its casing scrambled, which
/// is exactly the input shape the case-insensitive strategies must handle.
pub fn generate_catalog(seed: u64, n: usize, dup_rate: f64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut titles: Vec<String> = Vec::with_capacity(n);

    for i in 0..n {
        let reuse = !titles.is_empty() && rng.gen_bool(dup_rate.clamp(0.0, 1.0));
        if reuse {
            let source = titles[rng.gen_range(0..titles.len())].clone();
            titles.push(shuffle_case(&mut rng, &source));
        } else {
            titles.push(fresh_title(&mut rng, i));
        }
    }

    titles
}

fn fresh_title(rng: &mut impl Rng, i: usize) -> String {
    let a = STEMS[rng.gen_range(0..STEMS.len())];
    let b = STEMS[rng.gen_range(0..STEMS.len())];
    format!("The {} {} {}", a, b, i)
}

fn shuffle_case(rng: &mut impl Rng, title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize_title;

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(generate_catalog(7, 50, 0.3), generate_catalog(7, 50, 0.3));
    }

    #[test]
    fn dup_rate_zero_yields_all_unique_titles() {
        let titles = generate_catalog(7, 100, 0.0);
        let mut normalized: Vec<String> = titles.iter().map(|t| normalize_title(t)).collect();
        normalized.sort();
        normalized.dedup();
        assert_eq!(normalized.len(), titles.len());
    }

    #[test]
    fn positive_dup_rate_yields_case_insensitive_duplicates() {
        let titles = generate_catalog(7, 100, 0.5);
        let mut normalized: Vec<String> = titles.iter().map(|t| normalize_title(t)).collect();
        normalized.sort();
        normalized.dedup();
        assert!(normalized.len() < titles.len());
    }
}
