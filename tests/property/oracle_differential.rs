//! Differential testing: compare every strategy against the oracle.
//!
//! If they disagree, the oracle is right.

use super::oracles::{oracle_prefix_compare, oracle_top_matches};
use super::{prefix_strategy, vocabulary_strategy, word_strategy};
use crate::common::{all_strategies, pairs};
use autocomplete::{IndexConfig, PrefixOrder};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every strategy returns exactly the oracle's sequence.
    #[test]
    fn diff_top_matches(
        vocab in vocabulary_strategy(),
        prefix in prefix_strategy(),
        k in 0usize..20,
    ) {
        let expected = pairs(&oracle_top_matches(vocab.terms(), &prefix, k));
        for index in all_strategies(&vocab, &IndexConfig::default()) {
            prop_assert_eq!(
                pairs(&index.top_matches(&prefix, k)),
                expected.clone(),
                "{} differs from oracle on prefix {:?}, k={}",
                index.name(),
                prefix,
                k
            );
        }
    }

    /// With a small indexed length the precomputed strategy matches the
    /// oracle up to that length and is empty past it.
    #[test]
    fn diff_precomputed_respects_max_prefix(
        vocab in vocabulary_strategy(),
        prefix in prefix_strategy(),
        max_prefix in 0usize..4,
        k in 1usize..10,
    ) {
        let config = IndexConfig::default().with_max_prefix(max_prefix);
        let index = autocomplete::PrecomputedPrefixIndex::with_config(vocab.clone(), &config);
        let actual = pairs(&autocomplete::Autocompletor::top_matches(&index, &prefix, k));

        if prefix.chars().count() <= max_prefix {
            prop_assert_eq!(actual, pairs(&oracle_top_matches(vocab.terms(), &prefix, k)));
        } else {
            prop_assert!(actual.is_empty());
        }
    }

    /// PrefixOrder agrees with comparing materialized truncations.
    #[test]
    fn diff_prefix_compare(r in 0usize..8, a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(
            PrefixOrder::new(r).compare_words(&a, &b),
            oracle_prefix_compare(r, &a, &b)
        );
    }
}
