// src/fetcher/mod.rs
// =============================================================================
// This module fetches pages for the crawler.
//
// Submodules:
// - http: The real reqwest-backed fetcher and the FetchFailure enum
//
// The PageFetcher trait lives here. It is the seam between the crawl
// coordinator and the network: production code plugs in HttpFetcher, tests
// plug in an in-memory fetcher serving canned pages.
//
// Rust concepts:
// - Traits: Define shared behavior the coordinator can be generic over
// - async fn in traits: Stable since Rust 1.75 for generic (non-dyn) use
// =============================================================================

mod http;

pub use http::{FetchFailure, HttpFetcher};

// Anything that can turn a URL into page text (or a failure)
//
// Implementations must never panic on bad input - every network or protocol
// problem is reported as a FetchFailure so the crawl can carry on.
pub trait PageFetcher {
    /// Fetches one page, returning its body text or the reason it couldn't be
    /// retrieved. A per-request timeout is the implementation's business.
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure>;
}
