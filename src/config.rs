// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction settings.
//!
//! Only the precomputed strategy has a knob today: how many leading characters
//! of each word get their own bucket. A longer limit answers longer prefixes
//! from the index at the cost of one more bucket entry per word per character.
//!
//! Settings load from JSON:
//!
//! ```json
//! { "maxPrefix": 10 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of leading characters indexed by the precomputed strategy.
pub const MAX_PREFIX: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct IndexConfig {
    /// Longest prefix, in characters, that gets a bucket. Queries longer than
    /// this always come back empty from the precomputed strategy.
    pub max_prefix: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            max_prefix: MAX_PREFIX,
        }
    }
}

impl IndexConfig {
    pub fn with_max_prefix(mut self, max_prefix: usize) -> Self {
        self.max_prefix = max_prefix;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config {}", path.display()), e))?;
        Self::from_json_str(&content)
    }
}
