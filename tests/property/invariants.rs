//! Laws the orderings and result lists must satisfy.

use super::{prefix_strategy, term_strategy, vocabulary_strategy, word_strategy};
use crate::common::all_strategies;
use autocomplete::{rank_order, IndexConfig, PrefixOrder, SortedTerms};
use proptest::prelude::*;
use std::cmp::Ordering;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_prefix_order_antisymmetric(r in 0usize..8, a in word_strategy(), b in word_strategy()) {
        let order = PrefixOrder::new(r);
        prop_assert_eq!(order.compare_words(&a, &b), order.compare_words(&b, &a).reverse());
    }

    #[test]
    fn prop_prefix_order_reflexive(r in 0usize..8, a in word_strategy()) {
        prop_assert_eq!(PrefixOrder::new(r).compare_words(&a, &a), Ordering::Equal);
    }

    /// On word-sorted input, PrefixOrder never reports a later word as smaller.
    #[test]
    fn prop_prefix_order_monotone(r in 0usize..8, a in word_strategy(), b in word_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_ne!(PrefixOrder::new(r).compare_words(&lo, &hi), Ordering::Greater);
    }

    #[test]
    fn prop_prefix_order_zero_is_always_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(PrefixOrder::new(0).compare_words(&a, &b), Ordering::Equal);
    }

    #[test]
    fn prop_rank_order_is_total(a in term_strategy(), b in term_strategy()) {
        let ab = rank_order(&a, &b);
        prop_assert_eq!(ab, rank_order(&b, &a).reverse());
        if ab == Ordering::Equal {
            prop_assert_eq!(a.word(), b.word());
            prop_assert_eq!(a.weight(), b.weight());
        }
    }

    #[test]
    fn prop_sorted_terms_validate(vocab in vocabulary_strategy()) {
        let sorted = SortedTerms::from(vocab);
        prop_assert!(SortedTerms::new(sorted.into_inner()).is_ok());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_results_are_ranked_matches(
        vocab in vocabulary_strategy(),
        prefix in prefix_strategy(),
        k in 0usize..20,
    ) {
        for index in all_strategies(&vocab, &IndexConfig::default()) {
            let results = index.top_matches(&prefix, k);
            prop_assert!(results.len() <= k);
            for term in &results {
                prop_assert!(term.word().starts_with(prefix.as_str()));
            }
            for pair in results.windows(2) {
                prop_assert_ne!(rank_order(pair[0], pair[1]), Ordering::Greater);
            }
        }
    }

    /// Asking for at least as many results as matches returns every match.
    #[test]
    fn prop_large_k_returns_every_match(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        let total = vocab.terms().iter().filter(|t| t.has_prefix(&prefix)).count();
        for index in all_strategies(&vocab, &IndexConfig::default()) {
            prop_assert_eq!(index.top_matches(&prefix, total + 5).len(), total);
        }
    }

    #[test]
    fn prop_k_zero_is_empty(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        for index in all_strategies(&vocab, &IndexConfig::default()) {
            prop_assert!(index.top_matches(&prefix, 0).is_empty());
        }
    }

    /// Results for k are a prefix of results for k + 1.
    #[test]
    fn prop_results_nest_in_k(
        vocab in vocabulary_strategy(),
        prefix in prefix_strategy(),
        k in 0usize..15,
    ) {
        for index in all_strategies(&vocab, &IndexConfig::default()) {
            let small = index.top_matches(&prefix, k);
            let large = index.top_matches(&prefix, k + 1);
            prop_assert_eq!(&large[..small.len()], &small[..]);
        }
    }
}
