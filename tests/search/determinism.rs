//! Identical inputs produce identical outputs, whatever the strategy and
//! however the vocabulary was ordered.

use crate::common::{
    all_strategies, assert_strategies_agree, mixed_vocabulary, pairs, synthetic_vocabulary,
};
use autocomplete::{IndexConfig, Vocabulary};

#[test]
fn test_repeated_queries_are_stable() {
    for index in all_strategies(&synthetic_vocabulary(500), &IndexConfig::default()) {
        let first = pairs(&index.top_matches("ab", 20));
        for _ in 0..5 {
            assert_eq!(pairs(&index.top_matches("ab", 20)), first, "{}", index.name());
        }
    }
}

#[test]
fn test_strategies_agree_on_synthetic_vocabulary() {
    let indexes = all_strategies(&synthetic_vocabulary(2_000), &IndexConfig::default());
    for prefix in ["", "a", "b", "ab", "abc", "dd", "dcba", "aaaaaaa", "e"] {
        for k in [1, 3, 10, 250, 5_000] {
            assert_strategies_agree(&indexes, prefix, k);
        }
    }
}

#[test]
fn test_strategies_agree_on_mixed_vocabulary() {
    let indexes = all_strategies(&mixed_vocabulary(), &IndexConfig::default());
    for prefix in ["", "c", "ca", "car", "care", "café", "ü", "über", "d", "x"] {
        for k in [1, 2, 4, 20] {
            assert_strategies_agree(&indexes, prefix, k);
        }
    }
}

#[test]
fn test_input_order_does_not_change_results() {
    let vocab = synthetic_vocabulary(800);
    let reversed: Vocabulary = vocab.terms().iter().rev().cloned().collect();

    let forward = all_strategies(&vocab, &IndexConfig::default());
    let backward = all_strategies(&reversed, &IndexConfig::default());

    for (a, b) in forward.iter().zip(&backward) {
        for prefix in ["", "a", "cd", "bad"] {
            assert_eq!(
                pairs(&a.top_matches(prefix, 15)),
                pairs(&b.top_matches(prefix, 15)),
                "{} on {:?}",
                a.name(),
                prefix
            );
        }
    }
}

#[test]
fn test_footprint_is_pure() {
    for index in all_strategies(&synthetic_vocabulary(300), &IndexConfig::default()) {
        let first = index.estimated_memory_footprint();
        assert_eq!(index.estimated_memory_footprint(), first, "{}", index.name());
    }
}
