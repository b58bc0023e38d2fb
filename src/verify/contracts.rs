// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index structures.
//!
//! Debug-mode assertions that verify the properties the strategies depend on:
//!
//! 1. **Zero-cost in release builds** (the bodies are `debug_assert!`)
//! 2. **Early failure detection** during development and tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_sorted_by_word`     | Binary search strategy's vocabulary is sorted   |
//! | `check_bucket_ranked`      | Precomputed buckets are in rank order           |
//! | `check_bucket_matches_key` | Every bucket entry starts with its key          |
//! | `check_results_ranked`     | Query output is in rank order                   |
//! | `check_results_match`      | Query output only contains completions          |
//!
//! # Usage
//!
//! ```ignore
//! use autocomplete::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_sorted_by_word(&terms);
//!
//! // In release builds, this is a no-op
//! ```

use std::cmp::Ordering;

use crate::order::rank_order;
use crate::types::Term;

// ============================================================================
// VOCABULARY CONTRACTS
// ============================================================================

/// Check that terms are sorted by word.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted_by_word(terms: &[Term]) {
    if cfg!(debug_assertions) {
        for i in 1..terms.len() {
            debug_assert!(
                terms[i - 1] <= terms[i],
                "Contract violation: SortedByWord - terms[{}] ('{}') > terms[{}] ('{}')",
                i - 1,
                terms[i - 1].word(),
                i,
                terms[i].word()
            );
        }
    }
}

// ============================================================================
// BUCKET CONTRACTS
// ============================================================================

/// Check that a precomputed bucket is in rank order.
#[inline]
pub fn check_bucket_ranked(key: &str, bucket: &[usize], terms: &[Term]) {
    if cfg!(debug_assertions) {
        for i in 1..bucket.len() {
            let prev = &terms[bucket[i - 1]];
            let curr = &terms[bucket[i]];
            debug_assert!(
                rank_order(prev, curr) != Ordering::Greater,
                "Contract violation: BucketRanked - bucket '{}' has {} before {}",
                key,
                prev,
                curr
            );
        }
    }
}

/// Check that every term in a bucket starts with the bucket key.
#[inline]
pub fn check_bucket_matches_key(key: &str, bucket: &[usize], terms: &[Term]) {
    if cfg!(debug_assertions) {
        for &id in bucket {
            debug_assert!(
                terms[id].has_prefix(key),
                "Contract violation: BucketMatchesKey - '{}' filed under '{}'",
                terms[id].word(),
                key
            );
        }
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that query results are in rank order.
#[inline]
pub fn check_results_ranked(results: &[&Term]) {
    if cfg!(debug_assertions) {
        for pair in results.windows(2) {
            debug_assert!(
                rank_order(pair[0], pair[1]) != Ordering::Greater,
                "Contract violation: ResultsRanked - {} returned before {}",
                pair[0],
                pair[1]
            );
        }
    }
}

/// Check that query results complete the prefix and respect the limit.
#[inline]
pub fn check_results_match(results: &[&Term], prefix: &str, k: usize) {
    debug_assert!(
        results.len() <= k,
        "Contract violation: ResultsBounded - {} results for k = {}",
        results.len(),
        k
    );
    if cfg!(debug_assertions) {
        for term in results {
            debug_assert!(
                term.has_prefix(prefix),
                "Contract violation: ResultsMatch - '{}' does not start with '{}'",
                term.word(),
                prefix
            );
        }
    }
}
