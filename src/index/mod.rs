// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make completion fast.
//!
//! Four strategies behind one trait, each trading memory against query time:
//! - **Precomputed**: a bucket per prefix, answers are already ranked. O(k) per query
//! - **Linear**: sorted vocabulary, binary search for the block, heap for top-k
//! - **Naive**: scan everything with a bounded heap. O(n log k)
//! - **NaiveSort**: scan everything, sort all matches. The baseline
//!
//! All four return identical sequences for identical queries. Results are
//! ranked by [`rank_order`](crate::order::rank_order).

mod linear;
mod naive;
mod precomputed;

pub use linear::LinearScanIndex;
pub use naive::{NaiveScanIndex, NaiveSortIndex};
pub use precomputed::PrecomputedPrefixIndex;

use std::fmt;
use std::str::FromStr;

use crate::config::IndexConfig;
use crate::error::{Error, Result};
use crate::types::{Term, Vocabulary};

/// The top-k completion contract every strategy implements.
///
/// Instances are immutable once built, so a single one can serve queries from
/// any number of threads.
pub trait Autocompletor: Send + Sync {
    /// Short identifier, e.g. `"precomputed"`.
    fn name(&self) -> &'static str;

    /// Number of terms in the vocabulary.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `k` best-ranked terms starting with `prefix`.
    ///
    /// Fewer than `k` matches returns all of them; none returns an empty vec.
    /// `k == 0` is a valid request and always answers empty.
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<&Term>;

    /// Estimated resident bytes of the built structure.
    fn estimated_memory_footprint(&self) -> usize;

    /// [`top_matches`](Self::top_matches) for callers holding unchecked input.
    ///
    /// A missing prefix or negative `k` is an `InvalidArgument` error.
    fn try_top_matches(&self, prefix: Option<&str>, k: i64) -> Result<Vec<&Term>> {
        let prefix = prefix.ok_or_else(|| Error::invalid_arg("prefix", "prefix is absent"))?;
        if k < 0 {
            return Err(Error::invalid_arg("k", format!("illegal value of k: {}", k)));
        }
        let k = usize::try_from(k).unwrap_or(usize::MAX);
        Ok(self.top_matches(prefix, k))
    }
}

/// Estimated bytes for a plain list of terms.
pub(crate) fn terms_footprint(terms: &[Term]) -> usize {
    terms.iter().map(Term::footprint).sum()
}

// =============================================================================
// STRATEGY SELECTION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Precomputed,
    Linear,
    Naive,
    NaiveSort,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Precomputed,
        Strategy::Linear,
        Strategy::Naive,
        Strategy::NaiveSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Precomputed => "precomputed",
            Strategy::Linear => "linear",
            Strategy::Naive => "naive",
            Strategy::NaiveSort => "naive-sort",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                Error::invalid_arg(
                    "strategy",
                    format!(
                        "unknown strategy '{}' (expected one of: precomputed, linear, naive, naive-sort)",
                        s
                    ),
                )
            })
    }
}

/// Build the chosen strategy over `vocabulary`.
pub fn build_autocompletor(
    strategy: Strategy,
    vocabulary: Vocabulary,
    config: &IndexConfig,
) -> Box<dyn Autocompletor> {
    match strategy {
        Strategy::Precomputed => Box::new(PrecomputedPrefixIndex::with_config(vocabulary, config)),
        Strategy::Linear => Box::new(LinearScanIndex::new(vocabulary)),
        Strategy::Naive => Box::new(NaiveScanIndex::new(vocabulary)),
        Strategy::NaiveSort => Box::new(NaiveSortIndex::new(vocabulary)),
    }
}
