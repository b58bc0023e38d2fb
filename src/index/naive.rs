// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brute-force strategies: no index at all.
//!
//! Both keep the vocabulary in input order and test every word on every
//! query. They differ only in how the matches are ranked:
//!
//! - [`NaiveScanIndex`]: bounded heap of size k, O(n log k)
//! - [`NaiveSortIndex`]: sort every match, then truncate, O(n + m log m)
//!
//! The sort variant does strictly more work. It exists as the baseline the
//! other strategies are benchmarked against.

use log::debug;

use super::{terms_footprint, Autocompletor, Strategy};
use crate::search::{matching_terms, select_top_k, sort_top_k};
use crate::types::{Term, Vocabulary};
use crate::verify::contracts::{check_results_match, check_results_ranked};

/// Full scan with a bounded heap.
#[derive(Debug, Clone)]
pub struct NaiveScanIndex {
    terms: Vec<Term>,
}

impl NaiveScanIndex {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let terms = vocabulary.into_terms();
        debug!("built naive index: {} terms", terms.len());
        NaiveScanIndex { terms }
    }
}

impl Autocompletor for NaiveScanIndex {
    fn name(&self) -> &'static str {
        Strategy::Naive.name()
    }

    fn len(&self) -> usize {
        self.terms.len()
    }

    fn top_matches(&self, prefix: &str, k: usize) -> Vec<&Term> {
        let results = select_top_k(matching_terms(&self.terms, prefix), k);
        check_results_ranked(&results);
        check_results_match(&results, prefix, k);
        results
    }

    fn estimated_memory_footprint(&self) -> usize {
        terms_footprint(&self.terms)
    }
}

/// Full scan, full sort.
#[derive(Debug, Clone)]
pub struct NaiveSortIndex {
    terms: Vec<Term>,
}

impl NaiveSortIndex {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let terms = vocabulary.into_terms();
        debug!("built naive-sort index: {} terms", terms.len());
        NaiveSortIndex { terms }
    }
}

impl Autocompletor for NaiveSortIndex {
    fn name(&self) -> &'static str {
        Strategy::NaiveSort.name()
    }

    fn len(&self) -> usize {
        self.terms.len()
    }

    fn top_matches(&self, prefix: &str, k: usize) -> Vec<&Term> {
        let results = sort_top_k(matching_terms(&self.terms, prefix), k);
        check_results_ranked(&results);
        check_results_match(&results, prefix, k);
        results
    }

    fn estimated_memory_footprint(&self) -> usize {
        terms_footprint(&self.terms)
    }
}
