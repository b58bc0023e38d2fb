// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of every index: terms and the vocabulary they live in.
//!
//! A [`Term`] is a word with a non-negative weight. Its identity is the word
//! alone, so two terms with the same word are equal no matter what they weigh.
//! Duplicates are never merged, though; a vocabulary with `bat:2` and `bat:5`
//! keeps both entries and both can come back from a query.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Term**: `weight >= 0 ∧ weight.is_finite()`
//!   Checked once at construction. Every ranking comparison after that relies
//!   on weights being totally ordered.
//!
//! - **Vocabulary**: built from parallel arrays with `words.len() = weights.len()`.
//!   Term `i` pairs `words[i]` with `weights[i]`; input order is preserved.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// MEMORY ACCOUNTING
// =============================================================================

/// Bytes charged per character when estimating index footprints.
pub const BYTES_PER_CHAR: usize = 2;

/// Bytes charged per stored weight when estimating index footprints.
pub const BYTES_PER_DOUBLE: usize = 8;

// =============================================================================
// TERM
// =============================================================================

/// A word and its weight.
///
/// Ordering and equality look at the word only. Use
/// [`rank_order`](crate::order::rank_order) when weight matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TermRecord")]
pub struct Term {
    word: String,
    weight: f64,
}

/// Unvalidated wire form of a term. Deserialization funnels through
/// [`Term::new`] so a JSON vocabulary cannot smuggle in negative weights.
#[derive(Deserialize)]
struct TermRecord {
    word: String,
    weight: f64,
}

impl TryFrom<TermRecord> for Term {
    type Error = Error;

    fn try_from(record: TermRecord) -> Result<Self> {
        Term::new(record.word, record.weight)
    }
}

impl Term {
    /// Create a term, rejecting negative, NaN or infinite weights.
    pub fn new(word: impl Into<String>, weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(Error::invalid_arg("weight", "weight is NaN"));
        }
        if weight.is_infinite() {
            return Err(Error::invalid_arg(
                "weight",
                format!("weight {} is not finite", weight),
            ));
        }
        if weight < 0.0 {
            return Err(Error::invalid_arg(
                "weight",
                format!("negative weight {}", weight),
            ));
        }
        // -0.0 passes the check above but would rank below 0.0 under total_cmp
        let weight = if weight == 0.0 { 0.0 } else { weight };
        Ok(Term {
            word: word.into(),
            weight,
        })
    }

    /// Create a term from a word that may be missing.
    pub fn from_optional(word: Option<impl Into<String>>, weight: f64) -> Result<Self> {
        match word {
            Some(word) => Term::new(word, weight),
            None => Err(Error::invalid_arg("word", "word is absent")),
        }
    }

    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of characters (Unicode scalar values) in the word.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether this term completes `prefix` (ordinal, case-sensitive).
    #[inline]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.word.starts_with(prefix)
    }

    /// Estimated resident bytes for one stored copy of this term.
    #[inline]
    pub(crate) fn footprint(&self) -> usize {
        BYTES_PER_DOUBLE + BYTES_PER_CHAR * self.char_len()
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:2.1},{})", self.weight, self.word)
    }
}

// =============================================================================
// VOCABULARY
// =============================================================================

/// The validated input every strategy is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: Vec<Term>,
}

impl Vocabulary {
    /// Pair `words[i]` with `weights[i]`.
    ///
    /// Fails if the arrays differ in length or any weight is invalid.
    pub fn from_parts<S: AsRef<str>>(words: &[S], weights: &[f64]) -> Result<Self> {
        if words.len() != weights.len() {
            return Err(Error::invalid_arg(
                "weights",
                format!(
                    "terms and weights are not the same length ({} words, {} weights)",
                    words.len(),
                    weights.len()
                ),
            ));
        }

        let terms = words
            .iter()
            .zip(weights)
            .map(|(word, &weight)| Term::new(word.as_ref(), weight))
            .collect::<Result<Vec<_>>>()?;

        Ok(Vocabulary { terms })
    }

    /// Like [`from_parts`](Self::from_parts), for callers whose arrays may be missing.
    pub fn from_optional_parts<S: AsRef<str>>(
        words: Option<&[S]>,
        weights: Option<&[f64]>,
    ) -> Result<Self> {
        match (words, weights) {
            (Some(words), Some(weights)) => Vocabulary::from_parts(words, weights),
            (None, _) => Err(Error::invalid_arg("words", "words array is absent")),
            (_, None) => Err(Error::invalid_arg("weights", "weights array is absent")),
        }
    }

    pub fn from_terms(terms: Vec<Term>) -> Self {
        Vocabulary { terms }
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Total characters across all words.
    pub fn total_chars(&self) -> usize {
        self.terms.iter().map(Term::char_len).sum()
    }
}

impl From<Vec<Term>> for Vocabulary {
    fn from(terms: Vec<Term>) -> Self {
        Vocabulary::from_terms(terms)
    }
}

impl FromIterator<Term> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Vocabulary::from_terms(iter.into_iter().collect())
    }
}

impl IntoIterator for Vocabulary {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
