// src/extract/mod.rs
// =============================================================================
// This module extracts file references from downloaded source text.
//
// Submodules:
// - makefile: Pulls the file list out of a makefile's SRC variable
// - source: Finds #include directives and quoted resource literals
//
// This file (mod.rs) is the module root - it decides which extraction rules
// apply to a file and exports the public API the crawl pipeline uses.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - use: Bring the submodule extractors into scope for the dispatch below
// =============================================================================

mod makefile;
mod source;

use makefile::extract_makefile_sources;
use source::extract_source_references;

// Extracts every file reference from one downloaded file
//
// Parameters:
//   file_name: the file's own name (decides which rules apply)
//   content: the raw text that was fetched
//
// Returns: Vec<String> of referenced relative paths, in the order they
// appear. Duplicates are allowed here - deduplication against the visited
// registry happens downstream in the crawl pipeline.
//
// Rules:
// - A file named "makefile" (any casing) lists its files in a SRC variable,
//   so we parse that assignment instead of scanning for includes
// - Every other file is scanned for #include "..." directives plus quoted
//   resource literals ("texture.png" etc.)
pub fn extract_references(file_name: &str, content: &str) -> Vec<String> {
    if file_name.eq_ignore_ascii_case("makefile") {
        extract_makefile_sources(content)
    } else {
        extract_source_references(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makefile_dispatch_is_case_insensitive() {
        let content = "SRC = main.cpp util.cpp\n";
        assert_eq!(
            extract_references("Makefile", content),
            vec!["main.cpp", "util.cpp"]
        );
    }

    #[test]
    fn test_other_files_use_include_rules() {
        let content = "#include \"util/math.h\"\nint main() {}\n";
        assert_eq!(extract_references("main.cpp", content), vec!["util/math.h"]);
    }
}
