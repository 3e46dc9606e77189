// src/filter/admission.rs
// =============================================================================
// This module implements the URL admission filter.
//
// Every link the crawler discovers passes through here before it's allowed
// into the frontier. The filter is a pure function: same inputs always give
// the same answer, which is what makes deduplication safe.
//
// The checks, in order:
// 1. Resolve the (possibly relative) link against the page it was found on
// 2. Reject if the resolved URL is on a different origin (scheme + host)
// 3. Reject unless the path starts with one of the allowed prefixes
// 4. Reject media/archive files by extension (we only want document pages)
// 5. Strip the fragment (#...) so anchor variants collapse to one URL
//
// Rust concepts:
// - Option<T>: To represent "admitted" vs "rejected" without exceptions
// - &str vs String: Borrow inputs, return owned canonical URLs
// - Slices of &str: For the constant extension table
// =============================================================================

use url::{Origin, Url};

// File extensions that never lead to more links (images, audio, video,
// archives, PDFs). Matched case-insensitively against the end of the path.
const MEDIA_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".ico",
    ".mp3", ".wav", ".ogg", ".mp4", ".avi", ".mov", ".webm",
    ".pdf", ".zip", ".tar", ".gz",
];

// Decides whether discovered links are in scope for the crawl
//
// Built once at startup from the site origin and the allowed path prefixes;
// immutable afterwards, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct AdmissionFilter {
    /// The only origin (scheme + host + port) we're willing to crawl
    site_origin: Origin,
    /// Path prefixes that are in scope (e.g. "/docs", "/api")
    allowed_prefixes: Vec<String>,
}

impl AdmissionFilter {
    // Creates a filter scoped to the given site's origin and path prefixes
    //
    // Parameters:
    //   site: any URL on the target site (usually the first seed) - only
    //         its origin is kept
    //   allowed_prefixes: path prefixes that are in scope
    pub fn new(site: &Url, allowed_prefixes: Vec<String>) -> Self {
        AdmissionFilter {
            site_origin: site.origin(),
            allowed_prefixes,
        }
    }

    // Runs a raw link through the full admission pipeline
    //
    // Parameters:
    //   raw_link: the href value exactly as found in the page
    //   base_url: the URL of the page the link was found on
    //
    // Returns: Some(canonical_url) if admitted, None if rejected
    //
    // Examples (with origin https://kotlinlang.org, prefixes ["/docs"]):
    //   "intro.html"  found on "https://kotlinlang.org/docs/" -> admitted
    //   "/blog/news"                                          -> rejected (prefix)
    //   "https://other.org/docs/x"                            -> rejected (origin)
    //   "images/logo.png"                                     -> rejected (extension)
    //   "intro.html#overview" -> admitted as ".../intro.html" (fragment stripped)
    pub fn admit(&self, raw_link: &str, base_url: &str) -> Option<String> {
        let base = Url::parse(base_url).ok()?;

        // join() resolves relative references and also accepts absolute URLs,
        // so this one call covers both cases
        let mut resolved = base.join(raw_link).ok()?;

        // Origin must match exactly - this also throws out mailto:,
        // javascript: and friends, whose origins are opaque
        if resolved.origin() != self.site_origin {
            return None;
        }

        // Path must sit under one of the allowed prefixes
        // (a prefix match on the path, not a substring match on the URL)
        if !self
            .allowed_prefixes
            .iter()
            .any(|prefix| resolved.path().starts_with(prefix.as_str()))
        {
            return None;
        }

        // Skip media and archive files - they can't contain links
        let path = resolved.path().to_lowercase();
        if MEDIA_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            return None;
        }

        // Two URLs differing only by fragment are the same page
        resolved.set_fragment(None);

        Some(resolved.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> instead of Result?
//    - Rejection is not an error here, it's the expected outcome for most
//      links on a page (external links, media, out-of-scope paths)
//    - None simply means "not in scope", no reason needed
//
// 2. What is Url::origin()?
//    - The origin is the (scheme, host, port) triple browsers use for the
//      same-origin policy
//    - Comparing Origin values normalizes default ports, so
//      https://site:443/ and https://site/ compare equal
//
// 3. What does base.join(href) do?
//    - Resolves href the way a browser would:
//      "/docs" on "https://site/page" -> "https://site/docs"
//      "../x"  on "https://site/a/b"  -> "https://site/x"
//      "https://other.com/" stays as-is (already absolute)
//
// 4. Why set_fragment(None)?
//    - "#section1" and "#section2" point into the same document
//    - Stripping the fragment before returning means the dedup sets only
//      ever see one canonical form of each page
//
// 5. Why is purity important here?
//    - admit() has no side effects and no hidden state
//    - Calling it twice with the same inputs gives the same answer, so the
//      coordinator can safely use its output as a dedup key
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_filter() -> AdmissionFilter {
        let site = Url::parse("https://kotlinlang.org/").unwrap();
        AdmissionFilter::new(&site, vec!["/docs".to_string(), "/api".to_string()])
    }

    #[test]
    fn test_admit_relative_link() {
        let filter = docs_filter();
        let result = filter.admit("intro.html", "https://kotlinlang.org/docs/");
        assert_eq!(result, Some("https://kotlinlang.org/docs/intro.html".to_string()));
    }

    #[test]
    fn test_admit_absolute_link() {
        let filter = docs_filter();
        let result = filter.admit("https://kotlinlang.org/api/core/", "https://kotlinlang.org/docs/");
        assert_eq!(result, Some("https://kotlinlang.org/api/core/".to_string()));
    }

    #[test]
    fn test_reject_other_origin() {
        let filter = docs_filter();
        // Same path structure, wrong host - always rejected
        let result = filter.admit("https://other.org/docs/x", "https://kotlinlang.org/docs/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_reject_out_of_scope_path() {
        let filter = docs_filter();
        let result = filter.admit("/blog/news", "https://kotlinlang.org/docs/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_prefix_is_path_match_not_substring() {
        let filter = docs_filter();
        // "/docs" appears in the query, but the path is out of scope
        let result = filter.admit("/blog/post?from=/docs", "https://kotlinlang.org/docs/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_reject_media_extension() {
        let filter = docs_filter();
        let result = filter.admit("images/logo.png", "https://kotlinlang.org/docs/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_media_extension_case_insensitive() {
        let filter = docs_filter();
        let result = filter.admit("/docs/diagram.PNG", "https://kotlinlang.org/docs/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_admit_page_without_extension() {
        let filter = docs_filter();
        let result = filter.admit("/docs/page", "https://kotlinlang.org/docs/");
        assert_eq!(result, Some("https://kotlinlang.org/docs/page".to_string()));
    }

    #[test]
    fn test_fragment_variants_collapse() {
        let filter = docs_filter();
        let a = filter.admit("/docs/x#section1", "https://kotlinlang.org/docs/");
        let b = filter.admit("/docs/x#section2", "https://kotlinlang.org/docs/");
        assert_eq!(a, b);
        assert_eq!(a, Some("https://kotlinlang.org/docs/x".to_string()));
    }

    #[test]
    fn test_reject_mailto() {
        let filter = docs_filter();
        let result = filter.admit("mailto:docs@kotlinlang.org", "https://kotlinlang.org/docs/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_admission_is_idempotent() {
        let filter = docs_filter();
        let first = filter.admit("../docs/intro.html", "https://kotlinlang.org/docs/topics/");
        let second = filter.admit("../docs/intro.html", "https://kotlinlang.org/docs/topics/");
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
