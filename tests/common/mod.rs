//! Shared test utilities and fixtures.

#![allow(dead_code)]

use autocomplete::{Autocompletor, Term, Vocabulary};

// Re-export canonical test utilities from autocomplete::testing
#[allow(unused_imports)]
pub use autocomplete::testing::{all_strategies, pairs, sample_vocabulary, vocabulary_of, words};

// ============================================================================
// FIXTURES
// ============================================================================

/// A vocabulary with shared prefixes, ties on weight and multi-byte words.
pub fn mixed_vocabulary() -> Vocabulary {
    vocabulary_of(&[
        ("car", 50.0),
        ("card", 20.0),
        ("care", 20.0),
        ("career", 35.0),
        ("cart", 5.0),
        ("cat", 50.0),
        ("dog", 12.0),
        ("dot", 0.0),
        ("café", 8.0),
        ("über", 3.0),
        ("übung", 3.0),
        ("a", 1.0),
        ("", 7.0),
    ])
}

/// Deterministic synthetic vocabulary of `n` words over a small alphabet.
///
/// Small alphabets make long shared prefixes common, which is what stresses
/// the block search and the precomputed buckets.
pub fn synthetic_vocabulary(n: usize) -> Vocabulary {
    const ALPHABET: &[u8] = b"abcd";
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..n)
        .map(|_| {
            let len = 1 + (next() % 8) as usize;
            let word: String = (0..len)
                .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize] as char)
                .collect();
            let weight = (next() % 1000) as f64;
            Term::new(word, weight).expect("synthetic weights are valid")
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that every strategy answers `(prefix, k)` identically.
pub fn assert_strategies_agree(indexes: &[Box<dyn Autocompletor>], prefix: &str, k: usize) {
    let Some((first, rest)) = indexes.split_first() else {
        return;
    };
    let expected = pairs(&first.top_matches(prefix, k));
    for index in rest {
        let actual = pairs(&index.top_matches(prefix, k));
        assert_eq!(
            actual,
            expected,
            "{} and {} disagree on prefix {:?}, k={}",
            index.name(),
            first.name(),
            prefix,
            k
        );
    }
}

/// Assert results are in non-increasing weight order.
pub fn assert_descending_weight(results: &[&Term]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].weight() >= pair[1].weight(),
            "{} ranked above {}",
            pair[0],
            pair[1]
        );
    }
}
