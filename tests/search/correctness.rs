//! Expected answers on small hand-checked vocabularies.

use crate::common::{
    all_strategies, assert_descending_weight, mixed_vocabulary, sample_vocabulary, words,
};
use autocomplete::IndexConfig;

#[test]
fn test_sample_vocabulary_answers() {
    for index in all_strategies(&sample_vocabulary(), &IndexConfig::default()) {
        let name = index.name();
        assert_eq!(words(&index.top_matches("b", 2)), ["bell", "bat"], "{name}");
        assert_eq!(words(&index.top_matches("a", 2)), ["air"], "{name}");
        assert!(index.top_matches("c", 5).is_empty(), "{name}");
        assert_eq!(
            words(&index.top_matches("", 4)),
            ["bell", "air", "bat", "boy"],
            "{name}"
        );
    }
}

#[test]
fn test_k_larger_than_matches_returns_all_ranked() {
    for index in all_strategies(&sample_vocabulary(), &IndexConfig::default()) {
        let results = index.top_matches("b", 100);
        assert_eq!(words(&results), ["bell", "bat", "boy"], "{}", index.name());
        assert_descending_weight(&results);
    }
}

#[test]
fn test_results_carry_weights() {
    for index in all_strategies(&sample_vocabulary(), &IndexConfig::default()) {
        let results = index.top_matches("be", 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word(), "bell");
        assert_eq!(results[0].weight(), 4.0);
    }
}

#[test]
fn test_equal_weights_break_ties_by_word() {
    for index in all_strategies(&mixed_vocabulary(), &IndexConfig::default()) {
        // car:50 and cat:50 tie, card:20 and care:20 tie
        assert_eq!(
            words(&index.top_matches("ca", 5)),
            ["car", "cat", "career", "card", "care"],
            "{}",
            index.name()
        );
    }
}

#[test]
fn test_word_equal_to_prefix_matches() {
    for index in all_strategies(&mixed_vocabulary(), &IndexConfig::default()) {
        let results = words(&index.top_matches("car", 10));
        assert_eq!(
            results,
            ["car", "career", "card", "care", "cart"],
            "{}",
            index.name()
        );
    }
}

#[test]
fn test_multibyte_prefixes() {
    for index in all_strategies(&mixed_vocabulary(), &IndexConfig::default()) {
        assert_eq!(words(&index.top_matches("caf", 3)), ["café"], "{}", index.name());
        assert_eq!(
            words(&index.top_matches("ü", 3)),
            ["über", "übung"],
            "{}",
            index.name()
        );
        assert_eq!(words(&index.top_matches("üb", 1)), ["über"], "{}", index.name());
    }
}

#[test]
fn test_matching_is_case_sensitive() {
    for index in all_strategies(&sample_vocabulary(), &IndexConfig::default()) {
        assert!(index.top_matches("B", 4).is_empty(), "{}", index.name());
    }
}

#[test]
fn test_zero_weight_terms_are_returned() {
    for index in all_strategies(&mixed_vocabulary(), &IndexConfig::default()) {
        assert_eq!(words(&index.top_matches("do", 5)), ["dog", "dot"], "{}", index.name());
    }
}

#[test]
fn test_empty_word_only_matches_empty_prefix() {
    for index in all_strategies(&mixed_vocabulary(), &IndexConfig::default()) {
        let all = words(&index.top_matches("", 100));
        assert_eq!(all.len(), 13, "{}", index.name());
        assert!(all.contains(&""), "{}", index.name());
        assert!(!words(&index.top_matches("a", 100)).contains(&""));
    }
}
