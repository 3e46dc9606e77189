// src/filter/mod.rs
// =============================================================================
// This module decides which discovered links belong in the crawl.
//
// Submodules:
// - admission: The URL admission filter (resolve, scope-check, normalize)
//
// This file (mod.rs) is the module root - it exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod admission;

// Re-export public items from submodules
// This lets users write `filter::AdmissionFilter` instead of
// `filter::admission::AdmissionFilter`
pub use admission::AdmissionFilter;
