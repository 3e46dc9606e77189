// src/fetcher/http.rs
// =============================================================================
// This module talks to the network.
//
// Key functionality:
// - Makes one HTTP GET per URL with a bounded per-request timeout
// - Accepts only "200 OK" responses whose content-type is text/html
// - Converts every failure mode (timeout, DNS, non-200, wrong content-type)
//   into a FetchFailure value - nothing here ever panics or propagates a
//   raw error into the crawl loop
//
// Rust concepts:
// - async/await: For network I/O
// - Enums: To represent the different ways a fetch can fail
// - Result<T, E>: Success (page body) or failure (reason), nothing implicit
// =============================================================================

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::PageFetcher;

// How long we're willing to wait for any single request
// This is independent of the crawl's overall time budget: it only ensures
// one slow server can't stall a whole batch forever
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Why a page could not be fetched
//
// Every variant is non-fatal: the URL is logged, abandoned, and the crawl
// moves on. There are no retries.
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The server answered with something other than 200 OK
    Status(u16),
    /// The response was not HTML (holds the content-type we got instead)
    NotHtml(String),
    /// The request timed out
    Timeout,
    /// Transport-level problem (DNS, connection refused, TLS, ...)
    Transport(String),
}

// Human-readable form for log lines
impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Status(code) => write!(f, "HTTP {}", code),
            FetchFailure::NotHtml(content_type) => {
                write!(f, "not HTML (content-type: {})", content_type)
            }
            FetchFailure::Timeout => write!(f, "request timed out"),
            FetchFailure::Transport(message) => write!(f, "{}", message),
        }
    }
}

// The production fetcher, backed by a shared reqwest client
//
// The client keeps a connection pool, so cloning/reusing it across requests
// is cheap and recommended
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher and its HTTP client
    //
    // This is the crawl's only piece of network setup; if it fails there is
    // no point continuing, so the error goes straight up to main
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        // One GET, no retries
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        // We only follow links out of real pages; redirects are handled
        // inside reqwest, so anything non-200 here is a dead end
        if response.status() != StatusCode::OK {
            return Err(FetchFailure::Status(response.status().as_u16()));
        }

        // Check the content-type before downloading the body - a link to a
        // tarball can answer 200 but won't contain anchors
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("text/html") {
            return Err(FetchFailure::NotHtml(content_type));
        }

        // Reading the body can also time out or drop mid-stream
        response.text().await.map_err(categorize_error)
    }
}

// Maps reqwest's error type onto our failure taxonomy
//
// reqwest errors can happen for many reasons (timeout, DNS, TLS, protocol);
// for the crawl they all mean the same thing - skip this URL - but keeping
// the distinction makes the log lines useful
fn categorize_error(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else {
        FetchFailure::Transport(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why GET and not HEAD?
//    - We need the page body to extract links from it
//    - A HEAD request would only tell us the page exists
//
// 2. Why check content-type before .text()?
//    - response.text() downloads the whole body
//    - For a 50 MB zip file served with 200 OK that's wasted bandwidth;
//      the header tells us up front it can't contain links
//
// 3. What does map_err do?
//    - Transforms the error inside a Result without touching the Ok value
//    - Here it converts reqwest::Error into our own FetchFailure
//    - Combined with ?, failures convert and return in one line
//
// 4. Why does new() return anyhow::Result but fetch() FetchFailure?
//    - Failing to build the client is a startup problem: fatal, reported
//      to the user, program exits
//    - Failing to fetch one page is routine: logged and skipped
//    - Different consequences deserve different error types
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        assert_eq!(FetchFailure::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            FetchFailure::NotHtml("image/png".to_string()).to_string(),
            "not HTML (content-type: image/png)"
        );
        assert_eq!(FetchFailure::Timeout.to_string(), "request timed out");
    }

    #[test]
    fn test_failure_serializes_with_reason_tag() {
        let json = serde_json::to_string(&FetchFailure::Status(404)).unwrap();
        assert!(json.contains("\"reason\":\"status\""));
    }

    #[test]
    fn test_build_fetcher() {
        // Client construction needs no network, just a TLS backend
        assert!(HttpFetcher::new().is_ok());
    }
}
