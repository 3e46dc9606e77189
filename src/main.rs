// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the seeds and derive the crawl scope (origin + path prefixes)
// 3. Run the breadth-first crawl
// 4. Write the sorted link set to JSON and text files
// 5. Exit with proper code (0 = success, 2 = startup error)
//
// Rust concepts used:
// - async/await: Because we make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - The ? operator: To bubble startup failures up to one place
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the frontier coordinator
mod extractor;     // src/extractor/ - pulls hrefs out of page bodies
mod fetcher;       // src/fetcher/ - HTTP fetching behind the PageFetcher seam
mod filter;        // src/filter/ - URL admission (scope + normalization)
mod output;        // src/output.rs - JSON/text artifacts

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;  // Parser trait enables the parse() method
use url::Url;

use cli::Cli;
use crawl::{CrawlConfig, Crawler};
use fetcher::HttpFetcher;
use filter::AdmissionFilter;

// The #[tokio::main] attribute transforms our async main into a real main
// function: it creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Startup failures are the only fatal path - everything that
            // goes wrong mid-crawl is logged and skipped instead
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
//
// Anything that returns Err here happens before the first page is fetched
// and before any output file is written
async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.max_concurrent == 0 {
        return Err(anyhow!("--max-concurrent must be at least 1"));
    }

    // Parse and validate every seed up front - a typo'd seed is a startup
    // error, not something to discover three batches in
    let seed_urls = parse_seeds(&cli.seeds)?;
    let site = &seed_urls[0];

    // The crawl is scoped to exactly one origin; seeds that disagree would
    // silently never have their links admitted, so reject them loudly
    for seed in &seed_urls[1..] {
        if seed.origin() != site.origin() {
            return Err(anyhow!(
                "Seed '{}' is not on the same origin as '{}'",
                seed, site
            ));
        }
    }

    let prefixes = if cli.allow_prefixes.is_empty() {
        derive_prefixes(&seed_urls)
    } else {
        cli.allow_prefixes.clone()
    };

    println!("🔍 Crawling {}", site.origin().ascii_serialization());
    println!("   Seeds: {}", cli.seeds.join(", "));
    println!("   Scope: {}", prefixes.join(", "));
    println!(
        "   Concurrency: {} | Time budget: {}s",
        cli.max_concurrent, cli.time_budget_secs
    );

    let filter = AdmissionFilter::new(site, prefixes);

    // Building the HTTP client is our one piece of network setup; if it
    // fails there is nothing useful left to do
    let fetcher = HttpFetcher::new()?;

    let config = CrawlConfig {
        max_concurrent: cli.max_concurrent,
        time_budget: Duration::from_secs(cli.time_budget_secs),
        ..CrawlConfig::default()
    };

    // Seeds go in as the Url crate's canonical string form, the same form
    // the admission filter emits - so seed and discovered URLs dedup cleanly
    let seeds = seed_urls.iter().map(Url::to_string).collect();
    let crawler = Crawler::new(seeds, filter, fetcher, config);

    let links = crawler.crawl().await;

    // Both artifacts are always written, including after a budget-truncated
    // crawl - partial results are valid results
    output::write_json(&cli.json_out, &links)?;
    output::write_text(&cli.text_out, &links)?;

    println!("\n✅ Crawl complete! Found {} link(s)", links.len());
    println!(
        "   📄 Wrote {} and {}",
        cli.json_out.display(),
        cli.text_out.display()
    );

    Ok(())
}

// Parses every seed string, failing fast on the first invalid one
fn parse_seeds(seeds: &[String]) -> Result<Vec<Url>> {
    seeds
        .iter()
        .map(|s| Url::parse(s).map_err(|e| anyhow!("Invalid seed URL '{}': {}", s, e)))
        .collect()
}

// Derives the allowed path prefixes from the seeds' first path segments
//
// Example: seeds https://site/docs/ and https://site/api/core/ give
// ["/docs", "/api"]. A seed at the site root scopes the whole site ("/").
fn derive_prefixes(seeds: &[Url]) -> Vec<String> {
    let mut prefixes: Vec<String> = Vec::new();

    for seed in seeds {
        let first_segment = seed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .unwrap_or("");

        let prefix = if first_segment.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", first_segment)
        };

        if !prefixes.contains(&prefix) {
            prefixes.push(prefix);
        }
    }

    prefixes
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why validate seeds before building anything?
//    - Startup errors should surface in milliseconds with a clear message
//    - Once the crawl is running, failures are per-URL and non-fatal, so
//      this is the last moment to be strict
//
// 2. What does ..CrawlConfig::default() do?
//    - Struct update syntax: take max_concurrent and time_budget from the
//      CLI, fill every other field from the Default impl
//
// 3. Why exit code 2 for errors?
//    - 0 means the crawl completed and the output files exist
//    - 2 means we never got started (bad arguments, no network stack)
//    - There's no code 1: fetch failures and budget expiry are expected
//      outcomes of a healthy run, not process-level errors
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_prefixes_from_seed_paths() {
        let seeds = vec![
            Url::parse("https://kotlinlang.org/docs/").unwrap(),
            Url::parse("https://kotlinlang.org/api/core/").unwrap(),
        ];
        assert_eq!(derive_prefixes(&seeds), vec!["/docs", "/api"]);
    }

    #[test]
    fn test_derive_prefixes_deduplicates() {
        let seeds = vec![
            Url::parse("https://kotlinlang.org/docs/").unwrap(),
            Url::parse("https://kotlinlang.org/docs/intro.html").unwrap(),
        ];
        assert_eq!(derive_prefixes(&seeds), vec!["/docs"]);
    }

    #[test]
    fn test_root_seed_scopes_whole_site() {
        let seeds = vec![Url::parse("https://kotlinlang.org/").unwrap()];
        assert_eq!(derive_prefixes(&seeds), vec!["/"]);
    }

    #[test]
    fn test_parse_seeds_rejects_garbage() {
        let result = parse_seeds(&["not a url".to_string()]);
        assert!(result.is_err());
    }
}
