// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for the strategies.
//!
//! Top-k selection and prefix filtering, extracted here so the scanning
//! strategies share functions instead of inheriting from one another.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::order::rank_order;
use crate::types::Term;

/// Iterate over the terms completing `prefix`, in storage order.
pub fn matching_terms<'a, 'p>(
    terms: &'a [Term],
    prefix: &'p str,
) -> impl Iterator<Item = &'a Term> + 'p
where
    'a: 'p,
{
    terms.iter().filter(move |term| term.has_prefix(prefix))
}

/// Extract the top-K terms by rank using a bounded heap.
///
/// Time complexity: O(n log k) for heap operations + O(k log k) for the final drain.
/// Beats sorting everything when k << n.
pub fn select_top_k<'a, I>(terms: I, k: usize) -> Vec<&'a Term>
where
    I: IntoIterator<Item = &'a Term>,
{
    if k == 0 {
        return Vec::new();
    }

    // BinaryHeap is a max-heap; under rank order the "largest" element is the
    // worst-ranked one, so the heap top is always the next eviction candidate.
    struct Ranked<'a>(&'a Term);

    impl PartialEq for Ranked<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }

    impl Eq for Ranked<'_> {}

    impl Ord for Ranked<'_> {
        fn cmp(&self, other: &Self) -> Ordering {
            rank_order(self.0, other.0)
        }
    }

    impl PartialOrd for Ranked<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let mut heap: BinaryHeap<Ranked<'a>> = BinaryHeap::with_capacity(k.saturating_add(1).min(1024));

    for term in terms {
        if heap.len() < k {
            heap.push(Ranked(term));
        } else if let Some(worst) = heap.peek() {
            if rank_order(term, worst.0) == Ordering::Less {
                heap.pop();
                heap.push(Ranked(term));
            }
        }
    }

    // Ascending order under rank_order is best-first
    heap.into_sorted_vec().into_iter().map(|r| r.0).collect()
}

/// Sort every candidate by rank and keep the first `k`.
///
/// O(m log m) in the number of candidates. The heap path is faster; this one
/// exists as the baseline it gets measured against.
pub fn sort_top_k<'a, I>(terms: I, k: usize) -> Vec<&'a Term>
where
    I: IntoIterator<Item = &'a Term>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut all: Vec<&'a Term> = terms.into_iter().collect();
    all.sort_by(|a, b| rank_order(a, b));
    all.truncate(k);
    all
}
