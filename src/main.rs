// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info};

use autocomplete::{
    build_autocompletor, common_prefix_len_chars, load_vocabulary, Autocompletor, IndexConfig,
    PrecomputedPrefixIndex, Result, SortedTerms, Strategy, Term, Vocabulary,
};

mod cli;
use cli::display::{self, note, pad_left, pad_right, row, section_bot, section_mid, section_top};
use cli::{Cli, Commands};

/// Prefixes queried by `bench` when none are given.
const DEFAULT_BENCH_PREFIXES: [&str; 6] = ["", "a", "b", "ch", "qu", "zz"];

fn main() {
    let cli = Cli::parse();
    cli::logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Query {
            input,
            prefix,
            strategy,
            k,
            max_prefix,
            config,
            json,
        } => run_query(
            &input,
            &prefix,
            strategy,
            k,
            config.as_deref(),
            max_prefix,
            json,
        ),
        Commands::Bench {
            input,
            strategy,
            k,
            prefix,
            iterations,
        } => run_bench(&input, &strategy, k, &prefix, iterations),
        Commands::Inspect { input, max_prefix } => run_inspect(&input, max_prefix),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Resolve the index configuration: file first, then the command-line override.
fn resolve_config(config: Option<&Path>, max_prefix: Option<usize>) -> Result<IndexConfig> {
    let mut resolved = match config {
        Some(path) => IndexConfig::from_json_file(path)?,
        None => IndexConfig::default(),
    };
    if let Some(max_prefix) = max_prefix {
        resolved = resolved.with_max_prefix(max_prefix);
    }
    debug!("index config: maxPrefix={}", resolved.max_prefix);
    Ok(resolved)
}

// =============================================================================
// QUERY
// =============================================================================

fn run_query(
    input: &Path,
    prefix: &str,
    strategy: Strategy,
    k: i64,
    config: Option<&Path>,
    max_prefix: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = resolve_config(config, max_prefix)?;
    let vocabulary = load_vocabulary(input)?;

    let start = Instant::now();
    let index = build_autocompletor(strategy, vocabulary, &config);
    info!("built {} index over {} terms in {:?}", index.name(), index.len(), start.elapsed());

    let start = Instant::now();
    let results = index.try_top_matches(Some(prefix), k)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_results(index.as_ref(), prefix, &results, elapsed);
    Ok(())
}

fn print_results(index: &dyn Autocompletor, prefix: &str, results: &[&Term], elapsed: Duration) {
    println!();
    section_top("RESULTS");
    row(&format!(
        "  prefix {:?} via {}, {} match{} in {} µs",
        prefix,
        display::strategy_label(index.name()),
        results.len(),
        if results.len() == 1 { "" } else { "es" },
        display::timing_us(elapsed.as_secs_f64() * 1e6).trim_start(),
    ));
    section_mid("TERMS");
    if results.is_empty() {
        row(&format!("  {}", note("no terms start with this prefix")));
    }
    for (rank, term) in results.iter().enumerate() {
        row(&format!(
            "  {} {} {}",
            pad_left(&(rank + 1).to_string(), 4),
            display::weight_value(term.weight()),
            pad_right(term.word(), 40),
        ));
    }
    section_bot();
    println!();
}

// =============================================================================
// BENCH
// =============================================================================

fn run_bench(
    input: &Path,
    strategies: &[Strategy],
    k: usize,
    prefixes: &[String],
    iterations: u32,
) -> Result<()> {
    let vocabulary = load_vocabulary(input)?;
    let config = IndexConfig::default();

    let strategies: Vec<Strategy> = if strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        strategies.to_vec()
    };
    let prefixes: Vec<String> = if prefixes.is_empty() {
        DEFAULT_BENCH_PREFIXES.iter().map(|p| p.to_string()).collect()
    } else {
        prefixes.to_vec()
    };
    let iterations = iterations.max(1);

    println!();
    display::title("AUTOCOMPLETE BENCHMARK");
    println!();
    section_top("SETUP");
    row(&format!("  Terms:       {:>10}", vocabulary.len()));
    row(&format!("  k:           {:>10}", k));
    row(&format!("  Iterations:  {:>10}", iterations));
    section_bot();
    println!();

    for strategy in strategies {
        let start = Instant::now();
        let index = build_autocompletor(strategy, vocabulary.clone(), &config);
        let build_time = start.elapsed();

        section_top(strategy.name());
        row(&format!(
            "  build {} ms   memory {}",
            display::timing_ms(build_time.as_secs_f64() * 1e3).trim_start(),
            display::format_size(index.estimated_memory_footprint()),
        ));
        section_mid("QUERIES (µs per query)");
        for prefix in &prefixes {
            let (per_query, matches) = time_query(index.as_ref(), prefix, k, iterations);
            row(&format!(
                "  {} {}  {}",
                pad_right(&format!("{:?}", prefix), 12),
                display::timing_us(per_query),
                note(&format!("{} results", matches)),
            ));
        }
        section_bot();
        println!();
    }

    Ok(())
}

/// Mean microseconds per query and the result count of the last run.
fn time_query(index: &dyn Autocompletor, prefix: &str, k: usize, iterations: u32) -> (f64, usize) {
    let mut matches = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        matches = std::hint::black_box(index.top_matches(prefix, k)).len();
    }
    let per_query = start.elapsed().as_secs_f64() * 1e6 / f64::from(iterations);
    (per_query, matches)
}

// =============================================================================
// INSPECT
// =============================================================================

fn run_inspect(input: &Path, max_prefix: Option<usize>) -> Result<()> {
    let config = resolve_config(None, max_prefix)?;
    let vocabulary = load_vocabulary(input)?;

    println!();
    display::title("VOCABULARY INSPECTOR");
    println!();

    print_vocabulary_stats(&input.display().to_string(), &vocabulary);

    section_top("ESTIMATED MEMORY");
    for strategy in Strategy::ALL {
        let index = build_autocompletor(strategy, vocabulary.clone(), &config);
        row(&format!(
            "  {} {}",
            pad_right(&display::strategy_label(strategy.name()), 14),
            pad_left(&display::format_size(index.estimated_memory_footprint()), 12),
        ));
    }

    let precomputed = PrecomputedPrefixIndex::with_config(vocabulary, &config);
    section_mid("PRECOMPUTED BUCKETS");
    row(&format!("  Max prefix:  {:>10}", precomputed.max_prefix()));
    row(&format!("  Buckets:     {:>10}", precomputed.bucket_count()));
    row(&format!("  Entries:     {:>10}", precomputed.entry_count()));
    section_bot();
    println!();

    Ok(())
}

fn print_vocabulary_stats(source: &str, vocabulary: &Vocabulary) {
    let terms = vocabulary.terms();
    let total_chars = vocabulary.total_chars();
    let longest = terms.iter().map(Term::char_len).max().unwrap_or(0);
    let mean_len = if terms.is_empty() {
        0.0
    } else {
        total_chars as f64 / terms.len() as f64
    };
    let (min_weight, max_weight) = terms.iter().fold((f64::INFINITY, 0.0_f64), |(lo, hi), t| {
        (lo.min(t.weight()), hi.max(t.weight()))
    });

    // Adjacent words in sorted order share the prefixes that collapse into
    // common buckets.
    let sorted = SortedTerms::from(vocabulary.clone());
    let shared: usize = sorted
        .windows(2)
        .map(|pair| common_prefix_len_chars(pair[0].word(), pair[1].word()))
        .sum();
    let mean_shared = if sorted.len() > 1 {
        shared as f64 / (sorted.len() - 1) as f64
    } else {
        0.0
    };

    section_top("VOCABULARY");
    row(&format!("  Source:      {}", source));
    row(&format!("  Terms:       {:>10}", terms.len()));
    row(&format!("  Characters:  {:>10}", total_chars));
    row(&format!("  Longest:     {:>10}", longest));
    row(&format!("  Mean length: {:>10.2}", mean_len));
    row(&format!("  Shared pfx:  {:>10.2}", mean_shared));
    if !terms.is_empty() {
        row(&format!("  Weights:     {:>10.1} .. {:.1}", min_weight, max_weight));
    }
    section_bot();
    println!();
}
