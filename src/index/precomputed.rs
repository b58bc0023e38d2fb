// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precomputed prefix buckets: spend memory once, answer in O(k).
//!
//! Every word is filed under each of its first `max_prefix + 1` prefixes
//! (the empty prefix included). Each bucket is then sorted by rank a single
//! time, so a query is a hash lookup followed by taking the first `k` entries.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BUCKET_COMPLETE**: for `|p| <= max_prefix`, `buckets[p]` holds every term
//!    starting with `p`, duplicates included
//! 2. **BUCKET_RANKED**: every bucket is sorted by `rank_order`
//! 3. **BUCKET_BOUNDED**: no key is longer than `max_prefix` characters, so
//!    longer queries miss and come back empty
//!
//! # Memory
//!
//! A word of length `L` lands in `min(L, max_prefix) + 1` buckets, so
//! `max_prefix` caps the index size. The footprint estimate charges each key
//! once and the full word again for every bucket it appears in.

use std::collections::HashMap;

use log::{debug, trace};

use super::{Autocompletor, Strategy};
use crate::config::IndexConfig;
use crate::order::rank_order;
use crate::types::{Term, Vocabulary, BYTES_PER_CHAR};
use crate::utils::prefix_ends;
use crate::verify::contracts::{
    check_bucket_matches_key, check_bucket_ranked, check_results_match, check_results_ranked,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Prefix → ranked term ids.
#[derive(Debug, Clone)]
pub struct PrecomputedPrefixIndex {
    terms: Vec<Term>,
    buckets: HashMap<String, Vec<usize>>,
    max_prefix: usize,
}

impl PrecomputedPrefixIndex {
    /// Build with the default configuration.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_config(vocabulary, &IndexConfig::default())
    }

    pub fn with_config(vocabulary: Vocabulary, config: &IndexConfig) -> Self {
        let terms = vocabulary.into_terms();
        let max_prefix = config.max_prefix;

        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
        for (id, term) in terms.iter().enumerate() {
            let word = term.word();
            for end in prefix_ends(word, max_prefix) {
                let key = &word[..end];
                match buckets.get_mut(key) {
                    Some(bucket) => bucket.push(id),
                    None => {
                        buckets.insert(key.to_string(), vec![id]);
                    }
                }
            }
        }

        sort_buckets(&mut buckets, &terms);

        for (key, bucket) in &buckets {
            check_bucket_ranked(key, bucket, &terms);
            check_bucket_matches_key(key, bucket, &terms);
        }

        debug!(
            "built precomputed index: {} terms, {} buckets, max_prefix = {}",
            terms.len(),
            buckets.len(),
            max_prefix
        );

        PrecomputedPrefixIndex {
            terms,
            buckets,
            max_prefix,
        }
    }

    /// Longest prefix, in characters, that has a bucket.
    pub fn max_prefix(&self) -> usize {
        self.max_prefix
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total (prefix, term) pairs stored across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

#[cfg(feature = "parallel")]
fn sort_buckets(buckets: &mut HashMap<String, Vec<usize>>, terms: &[Term]) {
    buckets
        .par_iter_mut()
        .for_each(|(_, bucket)| bucket.sort_by(|&a, &b| rank_order(&terms[a], &terms[b])));
}

#[cfg(not(feature = "parallel"))]
fn sort_buckets(buckets: &mut HashMap<String, Vec<usize>>, terms: &[Term]) {
    for bucket in buckets.values_mut() {
        bucket.sort_by(|&a, &b| rank_order(&terms[a], &terms[b]));
    }
}

impl Autocompletor for PrecomputedPrefixIndex {
    fn name(&self) -> &'static str {
        Strategy::Precomputed.name()
    }

    fn len(&self) -> usize {
        self.terms.len()
    }

    fn top_matches(&self, prefix: &str, k: usize) -> Vec<&Term> {
        if k == 0 {
            return Vec::new();
        }
        let Some(bucket) = self.buckets.get(prefix) else {
            trace!("no bucket for prefix {:?}", prefix);
            return Vec::new();
        };

        let results: Vec<&Term> = bucket.iter().take(k).map(|&id| &self.terms[id]).collect();

        check_results_ranked(&results);
        check_results_match(&results, prefix, k);
        results
    }

    fn estimated_memory_footprint(&self) -> usize {
        self.buckets
            .iter()
            .map(|(key, bucket)| {
                let key_bytes = BYTES_PER_CHAR * key.chars().count();
                let entry_bytes: usize = bucket.iter().map(|&id| self.terms[id].footprint()).sum();
                key_bytes + entry_bytes
            })
            .sum()
    }
}
