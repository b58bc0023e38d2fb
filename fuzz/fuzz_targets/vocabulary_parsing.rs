// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the `weight<TAB>word` parser.
//!
//! Arbitrary text must either parse into valid terms or fail with an error.
//! It must never panic, and nothing it accepts may carry a negative or
//! non-finite weight.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Ok(vocabulary) = autocomplete::parse_vocabulary(&text) {
        for term in vocabulary.terms() {
            assert!(term.weight() >= 0.0, "accepted weight {}", term.weight());
            assert!(term.weight().is_finite());
        }
    }
});
