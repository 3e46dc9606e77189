// src/extractor/html.rs
// =============================================================================
// This module extracts raw links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever follows the browser parsing algorithm, so malformed markup is
// repaired rather than rejected - on a broken page we find fewer links,
// never an error.
//
// Rust concepts:
// - Iterators: filter_map to walk elements and collect attribute values
// - &str vs String: Borrow the page body, return owned href strings
// =============================================================================

use scraper::{Html, Selector};

// Extracts every href value from anchor elements in an HTML document
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw href values, exactly as written in the page -
// relative references, fragments and all. Resolution against the page URL
// happens later, in the admission filter.
//
// Example:
//   html = "<a href='intro.html'>Intro</a><a href='/docs'>Docs</a>"
//   result = ["intro.html", "/docs"]
pub fn extract_links(html: &str) -> Vec<String> {
    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error - OK here because our selector is a constant known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return raw hrefs instead of absolute URLs?
//    - One component, one job: this module answers "what does the page link
//      to", the admission filter answers "which of those do we want"
//    - It also keeps this function independent of the page's own URL
//
// 2. What is filter_map?
//    - Combines filter and map: the closure returns Option, and only the
//      Some values make it through
//    - element.value().attr("href") returns Option<&str>, so anchors that
//      somehow lost their href along the way are just skipped
//
// 3. What happens with broken HTML?
//    - html5ever applies the same error recovery browsers do (unclosed
//      tags, stray brackets, etc.)
//    - Worst case we miss some links; parsing itself cannot fail
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_relative_href_as_written() {
        let html = r#"<a href="intro.html">Intro</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec!["intro.html"]);
    }

    #[test]
    fn test_extract_multiple_links() {
        let html = r#"
            <a href="https://kotlinlang.org/docs/">Docs</a>
            <a href="/api/core/">API</a>
            <a href="../about">About</a>
        "#;
        let links = extract_links(html);
        assert_eq!(links.len(), 3);
        assert!(links.contains(&"../about".to_string()));
    }

    #[test]
    fn test_fragment_kept_verbatim() {
        // Fragments are stripped later, by the admission filter
        let html = r#"<a href="intro.html#overview">Overview</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec!["intro.html#overview"]);
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<a name="top">Top</a><a href="/docs">Docs</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec!["/docs"]);
    }

    #[test]
    fn test_malformed_html_degrades_gracefully() {
        // Unclosed tags and garbage should never panic the parser
        let html = r#"<div><a href="/docs/a">A<a href="/docs/b">B</div><p <<>"#;
        let links = extract_links(html);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_links("").is_empty());
    }
}
