// src/extract/makefile.rs
// =============================================================================
// This module extracts the source file list from a makefile.
//
// The makefiles on the course server all follow the same convention: one
// variable assignment that lists every file of the project, e.g.
//
//   SRC = main.cpp util.cpp shader.glsl
//
// We don't interpret the makefile at all - we just grab the value of that
// one assignment and split it on whitespace.
//
// Rust concepts:
// - LazyLock: Compile the regex once, share it read-only across all tasks
// - Iterators: split + filter + collect to build the result list
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// Matches a 'SRC = <values>' assignment, case-insensitive on the variable
// name. Capture group 1 holds everything after the '=' on that line.
static SRC_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)src\s*=\s*(.*)").unwrap());

// Extracts the file list from a makefile's SRC assignment
//
// Parameters:
//   content: the raw makefile text
//
// Returns: Vec<String> with one entry per whitespace-separated token in the
// SRC value. Empty if there is no SRC assignment at all.
pub fn extract_makefile_sources(content: &str) -> Vec<String> {
    match SRC_ASSIGNMENT.captures(content) {
        Some(captures) => captures[1]
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_assignment() {
        let content = "SRC = main.cpp util.cpp\n";
        assert_eq!(extract_makefile_sources(content), vec!["main.cpp", "util.cpp"]);
    }

    #[test]
    fn test_variable_name_is_case_insensitive() {
        let content = "src = main.cpp\n";
        assert_eq!(extract_makefile_sources(content), vec!["main.cpp"]);
    }

    #[test]
    fn test_extra_whitespace_between_tokens() {
        let content = "SRC =   main.cpp\t util/math.cpp  \n";
        assert_eq!(
            extract_makefile_sources(content),
            vec!["main.cpp", "util/math.cpp"]
        );
    }

    #[test]
    fn test_no_assignment_yields_nothing() {
        let content = "all:\n\tg++ -o demo main.cpp\n";
        assert!(extract_makefile_sources(content).is_empty());
    }

    #[test]
    fn test_assignment_among_other_rules() {
        let content = "CXX = g++\nSRC = a.cpp b.cpp\nall: $(SRC)\n";
        assert_eq!(extract_makefile_sources(content), vec!["a.cpp", "b.cpp"]);
    }
}
