// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the autocomplete command-line interface.
//!
//! Three subcommands: `query` to complete a prefix against a vocabulary file,
//! `bench` to time every strategy on the same input, and `inspect` to report
//! vocabulary statistics and per-strategy memory estimates.

pub mod display;
pub mod logger;

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand};

use autocomplete::Strategy;

#[derive(Parser)]
#[command(
    name = "autocomplete",
    about = "Top-k weighted prefix completion over a fixed vocabulary",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Complete a prefix and print the best-ranked terms
    Query {
        /// Vocabulary file (`weight<TAB>word` lines, or a `.json` array)
        #[arg(short, long)]
        input: PathBuf,

        /// Prefix to complete (may be empty)
        prefix: String,

        /// Strategy answering the query
        #[arg(short, long, value_parser = strategy_parser(), default_value = "precomputed")]
        strategy: Strategy,

        /// Maximum number of results
        #[arg(short = 'k', long = "limit", default_value = "10", allow_negative_numbers = true)]
        k: i64,

        /// Longest prefix the precomputed strategy indexes
        #[arg(long)]
        max_prefix: Option<usize>,

        /// JSON index configuration file (`{"maxPrefix": 10}`)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Time construction and queries for one or more strategies
    Bench {
        /// Vocabulary file
        #[arg(short, long)]
        input: PathBuf,

        /// Strategies to compare (default: all)
        #[arg(short, long, value_parser = strategy_parser())]
        strategy: Vec<Strategy>,

        /// Results requested per query
        #[arg(short = 'k', long = "limit", default_value = "10")]
        k: usize,

        /// Prefixes to query (default: a fixed spread of short prefixes)
        #[arg(short, long)]
        prefix: Vec<String>,

        /// Repetitions of each query
        #[arg(long, default_value = "1000")]
        iterations: u32,
    },

    /// Report vocabulary statistics and estimated index sizes
    Inspect {
        /// Vocabulary file
        #[arg(short, long)]
        input: PathBuf,

        /// Longest prefix the precomputed strategy indexes
        #[arg(long)]
        max_prefix: Option<usize>,
    },
}

/// Accepts exactly the strategy names, listing them in `--help`.
fn strategy_parser() -> impl TypedValueParser<Value = Strategy> {
    PossibleValuesParser::new(Strategy::ALL.map(Strategy::name))
        .try_map(|name| name.parse::<Strategy>())
}
