// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time building blocks shared by the strategies.
//!
//! `block` finds where completions of a prefix live in a sorted vocabulary;
//! `utils` picks the best k of them. The strategies in `index` are thin
//! compositions of these.

mod block;
pub mod utils;

pub use block::*;
pub use utils::{matching_terms, select_top_k, sort_top_k};
