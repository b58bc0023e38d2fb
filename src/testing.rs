// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::IndexConfig;
use crate::index::{build_autocompletor, Autocompletor, Strategy};
use crate::types::{Term, Vocabulary};

/// The four-word vocabulary used throughout the docs:
/// `{air:3, bat:2, bell:4, boy:1}`.
pub fn sample_vocabulary() -> Vocabulary {
    Vocabulary::from_parts(&["air", "bat", "bell", "boy"], &[3.0, 2.0, 4.0, 1.0])
        .expect("sample vocabulary is valid")
}

/// Build a vocabulary from `(word, weight)` pairs.
pub fn vocabulary_of(pairs: &[(&str, f64)]) -> Vocabulary {
    pairs
        .iter()
        .map(|(word, weight)| Term::new(*word, *weight).expect("test weights are valid"))
        .collect()
}

/// Words of a result list, in order.
pub fn words<'a>(results: &[&'a Term]) -> Vec<&'a str> {
    results.iter().map(|term| term.word()).collect()
}

/// `(word, weight)` pairs of a result list, in order.
pub fn pairs(results: &[&Term]) -> Vec<(String, f64)> {
    results
        .iter()
        .map(|term| (term.word().to_string(), term.weight()))
        .collect()
}

/// One instance of every strategy over the same vocabulary.
pub fn all_strategies(
    vocabulary: &Vocabulary,
    config: &IndexConfig,
) -> Vec<Box<dyn Autocompletor>> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| build_autocompletor(strategy, vocabulary.clone(), config))
        .collect()
}
