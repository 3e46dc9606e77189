// src/extractor/mod.rs
// =============================================================================
// This module pulls link candidates out of page bodies.
//
// Submodules:
// - html: Extracts raw href values from anchor tags
//
// Deliberately dumb: extraction returns hrefs exactly as written in the
// page. Resolving them to absolute URLs and deciding whether they're in
// scope is the admission filter's job, not this module's.
// =============================================================================

mod html;

pub use html::extract_links;
