// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Everything here is static for a run: seeds, concurrency, time budget,
// scope prefixes and output paths are fixed at startup, there is no live
// reconfiguration.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version = "0.1.0",
    about = "Harvests every in-scope link reachable from a documentation site",
    long_about = "link-harvester crawls breadth-first from the given seed URLs, following \
                  only links on the same origin and under the allowed path prefixes, and \
                  writes the deduplicated, sorted link set to JSON and plain text files."
)]
pub struct Cli {
    /// Seed URLs to start crawling from (e.g. https://kotlinlang.org/docs/)
    ///
    /// Positional, at least one required. All seeds must share one origin.
    #[arg(required = true)]
    pub seeds: Vec<String>,

    /// Maximum number of pages fetched concurrently (the batch size)
    #[arg(long, default_value_t = 20)]
    pub max_concurrent: usize,

    /// Total wall-clock budget for the crawl, in seconds
    ///
    /// When the budget runs out the crawl stops at the next batch boundary
    /// and writes whatever it has found so far - a partial result is still
    /// a valid result.
    #[arg(long, default_value_t = 21_000)]
    pub time_budget_secs: u64,

    /// Path prefix that is in scope (repeatable, e.g. --allow-prefix /docs)
    ///
    /// When omitted, each seed contributes its first path segment, so a
    /// seed of https://site/docs/ scopes the crawl to /docs.
    #[arg(long = "allow-prefix")]
    pub allow_prefixes: Vec<String>,

    /// Where to write the harvested links as a JSON array
    #[arg(long, default_value = "links.json")]
    pub json_out: PathBuf,

    /// Where to write the harvested links as newline-delimited text
    #[arg(long, default_value = "links.txt")]
    pub text_out: PathBuf,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a flat struct instead of subcommands?
//    - This tool does exactly one thing: crawl and write the link set
//    - Subcommands earn their keep when a binary has several distinct modes
//
// 2. What does #[arg(long, default_value_t = ...)] do?
//    - Creates a --flag-name option from the field name
//    - default_value_t takes a typed default (no string parsing needed)
//    - Plain default_value takes a string, which clap parses into the type
//
// 3. Why Vec<String> for seeds and prefixes?
//    - A Vec field with a positional arg means "collect all remaining
//      positional arguments"
//    - For --allow-prefix, a Vec means the flag can be repeated
// -----------------------------------------------------------------------------
