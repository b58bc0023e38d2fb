// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cross-strategy agreement.
//!
//! All four strategies must return the same `(word, weight)` sequence for the
//! same query. The precomputed strategy is exempt only for prefixes longer than
//! its indexed length, where it must come back empty.

#![no_main]

use autocomplete::{IndexConfig, Term, Vocabulary};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: a vocabulary, a query and an indexed prefix length.
#[derive(Debug, Clone)]
struct AgreementInput {
    vocabulary: Vocabulary,
    prefix: String,
    k: usize,
    max_prefix: usize,
}

/// Words over a small alphabet so prefixes collide often.
fn small_word(u: &mut arbitrary::Unstructured<'_>, max_len: usize) -> arbitrary::Result<String> {
    const ALPHABET: [char; 5] = ['a', 'b', 'c', 'ß', 'é'];
    let len = u.int_in_range(0..=max_len)?;
    (0..len)
        .map(|_| Ok(ALPHABET[u.int_in_range(0..=ALPHABET.len() - 1)?]))
        .collect()
}

impl<'a> arbitrary::Arbitrary<'a> for AgreementInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(0..=64)?;
        let mut terms = Vec::with_capacity(count);
        for _ in 0..count {
            let word = small_word(u, 12)?;
            // Small integer weights produce plenty of ties
            let weight = f64::from(u.int_in_range(0u16..=20)?);
            if let Ok(term) = Term::new(word, weight) {
                terms.push(term);
            }
        }

        Ok(AgreementInput {
            vocabulary: Vocabulary::from(terms),
            prefix: small_word(u, 6)?,
            k: u.int_in_range(0..=80)?,
            max_prefix: u.int_in_range(0..=12)?,
        })
    }
}

fn pairs(results: &[&Term]) -> Vec<(String, f64)> {
    results
        .iter()
        .map(|t| (t.word().to_string(), t.weight()))
        .collect()
}

fuzz_target!(|input: AgreementInput| {
    let config = IndexConfig::default().with_max_prefix(input.max_prefix);
    let indexes = autocomplete::testing::all_strategies(&input.vocabulary, &config);

    let mut reference: Option<Vec<(String, f64)>> = None;
    for index in &indexes {
        let results = index.top_matches(&input.prefix, input.k);

        // INVARIANT: results are bounded by k and all complete the prefix
        assert!(results.len() <= input.k);
        for term in &results {
            assert!(term.word().starts_with(input.prefix.as_str()));
        }

        if index.name() == "precomputed" && input.prefix.chars().count() > input.max_prefix {
            assert!(results.is_empty(), "precomputed answered past its indexed length");
            continue;
        }

        // INVARIANT: every other answer is identical
        let current = pairs(&results);
        match &reference {
            Some(expected) => assert_eq!(&current, expected, "{} disagrees", index.name()),
            None => reference = Some(current),
        }
    }
});
