// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Lengths in this crate count characters, not bytes, but slicing a `str`
//! needs byte offsets. These helpers bridge the two.

/// Byte offsets that end each of the first `max_chars` character prefixes of `word`.
///
/// Always starts with `0` (the empty prefix) and yields
/// `min(max_chars, char_count) + 1` offsets in total.
///
/// ```ignore
/// let ends: Vec<usize> = prefix_ends("café", 10).collect();
/// assert_eq!(ends, vec![0, 1, 2, 3, 5]);
/// ```
pub fn prefix_ends(word: &str, max_chars: usize) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        word.char_indices()
            .take(max_chars)
            .map(|(start, c)| start + c.len_utf8()),
    )
}

/// Number of characters two strings share at the start.
pub fn common_prefix_len_chars(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .count()
}
