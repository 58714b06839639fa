// src/crawl/mod.rs
// =============================================================================
// This module handles mirroring a remote project.
//
// Submodules:
// - source_file: The entity flowing through the pipeline (path + content)
// - visited: The registry of paths already claimed, shared across branches
// - fetch: The transport capability (trait + reqwest implementation)
// - pipeline: The fetch/discover/persist pipeline and its recursion
//
// This file (mod.rs) is the module root - it exports the public API that
// main.rs wires together.
// =============================================================================

mod fetch;
mod pipeline;
mod source_file;
mod visited;

// Re-export the pieces main.rs wires together
pub use fetch::HttpFetcher;
pub use pipeline::{Mirror, DEFAULT_ENTRY};
