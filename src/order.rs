// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two orderings every strategy agrees on.
//!
//! [`PrefixOrder`] compares words by their first `r` characters only. On a
//! vocabulary sorted by word it is monotone, which is what lets the binary
//! search strategy find the block of terms starting with a prefix using two
//! partition points instead of a scan.
//!
//! [`rank_order`] is how results come back: heaviest first, then by word. Because
//! it is total over everything a caller can observe (word and weight), all
//! strategies return identical sequences for identical queries.
//!
//! # Invariants
//!
//! - **PREFIX_ORDER_TRUNCATION**: `compare(a, b) = trunc_r(a).cmp(trunc_r(b))`
//!   where `trunc_r` keeps the first `r` characters. Symmetric by construction.
//! - **PREFIX_ORDER_MONOTONE**: `a <= b ⟹ compare(a, b) != Greater`.
//! - **PREFIX_ORDER_COST**: at most `r` characters of each word are inspected.

use std::cmp::Ordering;

use crate::types::Term;

/// Lexicographic comparison restricted to the first `prefix_len` characters.
///
/// When one word runs out before `prefix_len` while still tied, the shorter one
/// sorts first, exactly as full lexicographic order would have it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixOrder {
    prefix_len: usize,
}

impl PrefixOrder {
    pub fn new(prefix_len: usize) -> Self {
        PrefixOrder { prefix_len }
    }

    /// Order for locating completions of `prefix`.
    pub fn for_prefix(prefix: &str) -> Self {
        PrefixOrder::new(prefix.chars().count())
    }

    #[inline]
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    #[inline]
    pub fn compare(&self, a: &Term, b: &Term) -> Ordering {
        self.compare_words(a.word(), b.word())
    }

    /// Compare raw words, e.g. a vocabulary word against the query prefix.
    #[inline]
    pub fn compare_words(&self, a: &str, b: &str) -> Ordering {
        a.chars()
            .take(self.prefix_len)
            .cmp(b.chars().take(self.prefix_len))
    }
}

/// Result ranking: descending weight, ties broken by ascending word.
#[inline]
pub fn rank_order(a: &Term, b: &Term) -> Ordering {
    b.weight()
        .total_cmp(&a.weight())
        .then_with(|| a.word().cmp(b.word()))
}
