// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over a sorted vocabulary.
//!
//! The vocabulary is sorted by word once. A query binary-searches the block of
//! terms starting with the prefix (see [`prefix_block`]) and runs a bounded
//! heap over just that block.
//!
//! Construction: O(n log n). Query: O(|p| log n + m log k) for `m` matches.

use std::ops::Range;

use log::{debug, trace};

use super::{terms_footprint, Autocompletor, Strategy};
use crate::search::{prefix_block, select_top_k};
use crate::types::{Term, Vocabulary};
use crate::verify::contracts::{check_results_match, check_results_ranked, check_sorted_by_word};
use crate::verify::SortedTerms;

#[derive(Debug, Clone)]
pub struct LinearScanIndex {
    terms: SortedTerms,
}

impl LinearScanIndex {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::from_sorted(SortedTerms::from(vocabulary))
    }

    /// Build from terms that are already in word order.
    pub fn from_sorted(terms: SortedTerms) -> Self {
        check_sorted_by_word(&terms);
        debug!("built linear index: {} terms", terms.len());
        LinearScanIndex { terms }
    }

    /// The sorted vocabulary.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Positions in [`terms`](Self::terms) of the words starting with `prefix`.
    pub fn prefix_block(&self, prefix: &str) -> Range<usize> {
        prefix_block(&self.terms, prefix)
    }

    /// How many terms start with `prefix`.
    pub fn match_count(&self, prefix: &str) -> usize {
        self.prefix_block(prefix).len()
    }
}

impl Autocompletor for LinearScanIndex {
    fn name(&self) -> &'static str {
        Strategy::Linear.name()
    }

    fn len(&self) -> usize {
        self.terms.len()
    }

    fn top_matches(&self, prefix: &str, k: usize) -> Vec<&Term> {
        if k == 0 {
            return Vec::new();
        }
        let block = self.prefix_block(prefix);
        trace!("prefix {:?} spans {:?}", prefix, block);

        let results = select_top_k(&self.terms[block], k);

        check_results_ranked(&results);
        check_results_match(&results, prefix, k);
        results
    }

    fn estimated_memory_footprint(&self) -> usize {
        terms_footprint(&self.terms)
    }
}
