// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Locating the prefix-matching block in a sorted vocabulary.
//!
//! On terms sorted by word, every term starting with `p` sits in one
//! contiguous run. [`PrefixOrder`] of length `|p|` maps each term to
//! Less / Equal / Greater relative to `p`, and that mapping is monotone over
//! the sorted slice, so the run is bounded by two partition points.
//!
//! # Invariants
//!
//! - **BLOCK_SOUND**: every term in `terms[block]` starts with `prefix`
//! - **BLOCK_COMPLETE**: no term outside `terms[block]` starts with `prefix`
//!
//! Both only hold when `terms` is sorted by word; callers guarantee that.

use std::cmp::Ordering;
use std::ops::Range;

use crate::order::PrefixOrder;
use crate::types::Term;

/// Index range of the terms that start with `prefix`.
///
/// Returns an empty range positioned where `prefix` would be inserted when
/// nothing matches. O(|prefix| · log n).
pub fn prefix_block(terms: &[Term], prefix: &str) -> Range<usize> {
    let order = PrefixOrder::for_prefix(prefix);
    let start = terms.partition_point(|t| order.compare_words(t.word(), prefix) == Ordering::Less);
    let end = start
        + terms[start..]
            .partition_point(|t| order.compare_words(t.word(), prefix) == Ordering::Equal);
    start..end
}

/// First index whose word starts with `prefix`, if any.
pub fn first_index_of(terms: &[Term], prefix: &str) -> Option<usize> {
    let block = prefix_block(terms, prefix);
    (!block.is_empty()).then_some(block.start)
}

/// Last index whose word starts with `prefix`, if any.
pub fn last_index_of(terms: &[Term], prefix: &str) -> Option<usize> {
    let block = prefix_block(terms, prefix);
    (!block.is_empty()).then(|| block.end - 1)
}
