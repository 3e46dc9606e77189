// src/crawl/mod.rs
// =============================================================================
// This module is the heart of the harvester: the frontier coordinator.
//
// Features:
// - Breadth-first traversal from the seed URLs
// - Bounded concurrency: URLs are fetched in batches of at most
//   max_concurrent, and each batch is fully joined before the next starts
// - A wall-clock time budget checked between batches
// - Polite crawling with a fixed delay between batches
//
// Rust concepts:
// - Generics: The crawler is generic over its PageFetcher, so tests can
//   drive it against an in-memory site
// - Collections: HashSet for dedup, VecDeque for the FIFO frontier queue
// =============================================================================

mod frontier;

pub use frontier::{CrawlConfig, Crawler};
