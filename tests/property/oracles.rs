//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the optimized strategies.

use std::cmp::Ordering;

use autocomplete::Term;

/// Filter by `starts_with`, sort everything, truncate.
pub fn oracle_top_matches<'a>(terms: &'a [Term], prefix: &str, k: usize) -> Vec<&'a Term> {
    let mut matches: Vec<&Term> = terms.iter().filter(|t| t.word().starts_with(prefix)).collect();
    matches.sort_by(|a, b| {
        b.weight()
            .partial_cmp(&a.weight())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word().cmp(b.word()))
    });
    matches.truncate(k);
    matches
}

/// Compare the first `r` characters by materializing them.
pub fn oracle_prefix_compare(r: usize, a: &str, b: &str) -> Ordering {
    let a: String = a.chars().take(r).collect();
    let b: String = b.chars().take(r).collect();
    a.cmp(&b)
}
