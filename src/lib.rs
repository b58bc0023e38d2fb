// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-k weighted prefix completion.
//!
//! Given a fixed vocabulary of `(word, weight)` pairs, answer "the k heaviest
//! words starting with this prefix" through one of several interchangeable
//! strategies that trade memory for query time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  types.rs   │────▶│  order.rs    │────▶│  search/             │
//! │ (Term,      │     │ (PrefixOrder,│     │ (prefix_block,       │
//! │  Vocabulary)│     │  rank_order) │     │  select_top_k)       │
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//!        │                                            │
//!        ▼                                            ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        index/                                    │
//! │  Autocompletor ◀── PrecomputedPrefixIndex, LinearScanIndex,      │
//! │                    NaiveScanIndex, NaiveSortIndex                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Strategy      | Build        | Query                 | Memory              |
//! |---------------|--------------|-----------------------|---------------------|
//! | `precomputed` | O(n·P log n) | O(k)                  | O(P × total chars)  |
//! | `linear`      | O(n log n)   | O(\|p\| log n + m log k) | O(total chars)   |
//! | `naive`       | O(n)         | O(n log k)            | O(total chars)      |
//! | `naive-sort`  | O(n)         | O(n + m log m)        | O(total chars)      |
//!
//! `P` is the configured maximum indexed prefix length, `m` the number of matches.
//!
//! # Usage
//!
//! ```
//! use autocomplete::{Autocompletor, PrecomputedPrefixIndex, Vocabulary};
//!
//! let vocab = Vocabulary::from_parts(&["air", "bat", "bell", "boy"], &[3.0, 2.0, 4.0, 1.0])?;
//! let index = PrecomputedPrefixIndex::new(vocab);
//!
//! let words: Vec<&str> = index.top_matches("b", 2).iter().map(|t| t.word()).collect();
//! assert_eq!(words, ["bell", "bat"]);
//! # Ok::<(), autocomplete::Error>(())
//! ```

// Module declarations
pub mod build;
pub mod config;
mod error;
mod index;
mod order;
pub mod search;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use build::{load_vocabulary, parse_vocabulary};
pub use config::{IndexConfig, MAX_PREFIX};
pub use error::{Error, Result};
pub use index::{
    build_autocompletor, Autocompletor, LinearScanIndex, NaiveScanIndex, NaiveSortIndex,
    PrecomputedPrefixIndex, Strategy,
};
pub use order::{rank_order, PrefixOrder};
pub use types::{Term, Vocabulary, BYTES_PER_CHAR, BYTES_PER_DOUBLE};
pub use utils::common_prefix_len_chars;
pub use verify::{InvariantError, SortedTerms};
