// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a vocabulary from disk.
//!
//! Two formats:
//!
//! - **Text** (anything not ending in `.json`): one `weight<TAB>word` per line.
//!   Blank lines are skipped. The first non-blank line may hold just the term
//!   count, as the classic word-frequency files do; it is ignored. The weight
//!   may carry surrounding whitespace, the word is taken verbatim after the
//!   first tab.
//! - **JSON**: an array of `{ "word": ..., "weight": ... }` objects.
//!
//! ```text
//! 4
//!     3	air
//!     2	bat
//!     4	bell
//!     1	boy
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{Term, Vocabulary};

/// Load a vocabulary file, picking the format from the extension.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vocabulary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read vocabulary {}", path.display()), e))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let vocabulary = if is_json {
        serde_json::from_str(&content)?
    } else {
        parse_vocabulary(&content)?
    };

    debug!(
        "loaded {} terms from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}

/// Parse `weight<TAB>word` lines.
pub fn parse_vocabulary(content: &str) -> Result<Vocabulary> {
    let mut terms = Vec::new();
    let mut declared: Option<usize> = None;
    let mut seen_content = false;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        if !seen_content {
            seen_content = true;
            if !raw.contains('\t') {
                if let Ok(count) = raw.trim().parse::<usize>() {
                    declared = Some(count);
                    continue;
                }
            }
        }

        terms.push(parse_line(raw, line_no)?);
    }

    if let Some(count) = declared {
        if count != terms.len() {
            warn!(
                "vocabulary header declares {} terms but {} were read",
                count,
                terms.len()
            );
        }
    }

    Ok(Vocabulary::from_terms(terms))
}

/// Parse a single `weight<TAB>word` line. `line_no` is 1-based, for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Term> {
    let (weight, word) = line
        .split_once('\t')
        .ok_or_else(|| Error::parse(line_no, "expected '<weight>\\t<word>'"))?;

    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid weight '{}'", weight.trim())))?;

    let word = word.strip_suffix('\r').unwrap_or(word);

    Term::new(word, weight).map_err(|e| Error::parse(line_no, e.to_string()))
}
