// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! Instead of hoping the binary search strategy was handed sorted input, wrap
//! the terms in [`SortedTerms`]. The check runs once at construction and the
//! guarantee holds forever after.
//!
//! | Type          | What's Guaranteed                              |
//! |---------------|------------------------------------------------|
//! | `SortedTerms` | Terms in default (word) order, ties stable     |
//!
//! # Example
//!
//! ```ignore
//! // Validate input that claims to be sorted already
//! let sorted = SortedTerms::new(terms)?;
//!
//! // Or sort it here
//! let sorted = SortedTerms::sort(terms);
//! let index = LinearScanIndex::from_sorted(sorted);
//! ```

use std::ops::Deref;

use thiserror::Error;

use crate::types::{Term, Vocabulary};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Terms are not in default (word) order.
    #[error("terms not sorted at position {position}: '{previous}' > '{current}'")]
    UnsortedTerms {
        position: usize,
        previous: String,
        current: String,
    },
}

/// Terms sorted by word.
///
/// Equal words keep their input order, so two vocabularies with the same
/// input produce the same layout.
#[derive(Debug, Clone, Default)]
pub struct SortedTerms {
    terms: Vec<Term>,
}

impl SortedTerms {
    /// Validate that `terms` is already sorted.
    pub fn new(terms: Vec<Term>) -> Result<Self, InvariantError> {
        if let Some(i) = (1..terms.len()).find(|&i| terms[i - 1] > terms[i]) {
            return Err(InvariantError::UnsortedTerms {
                position: i,
                previous: terms[i - 1].word().to_string(),
                current: terms[i].word().to_string(),
            });
        }
        Ok(SortedTerms { terms })
    }

    /// Sort `terms` by word (stable).
    pub fn sort(mut terms: Vec<Term>) -> Self {
        terms.sort();
        SortedTerms { terms }
    }

    pub fn as_slice(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_inner(self) -> Vec<Term> {
        self.terms
    }
}

impl From<Vocabulary> for SortedTerms {
    fn from(vocabulary: Vocabulary) -> Self {
        SortedTerms::sort(vocabulary.into_terms())
    }
}

impl Deref for SortedTerms {
    type Target = [Term];

    fn deref(&self) -> &[Term] {
        &self.terms
    }
}
