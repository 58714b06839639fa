// src/extract/source.rs
// =============================================================================
// This module finds file references inside ordinary source files.
//
// Two kinds of references exist in the course projects:
//
// 1. Include directives:       #include "util/math.h"
// 2. Resource literals:        loadTexture("stone.png")
//
// The second kind matters because textures, shaders and data files are
// referenced as plain string literals, not through an include directive,
// yet they still have to be downloaded for the project to build and run.
// We only treat a bare quoted string as a reference when its extension is
// on a whitelist of common resource formats - otherwise every log message
// in the code would look like a file to fetch.
//
// Rust concepts:
// - LazyLock: Compile each regex once at first use, then share it read-only
//   across every concurrent task (regexes are immutable after compilation)
// - captures_iter: Iterate over all matches of a pattern in the text
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// Extensions that mark a bare quoted literal as a fetchable resource file.
// This is configuration, not logic: extend the list to recognize more
// formats, no code changes needed.
pub const RESOURCE_EXTENSIONS: &[&str] = &[
    "bmp", "glsl", "gz", "jpeg", "jpg", "mp3", "mp4", "png", "tar", "txt", "xml", "zip",
];

// Matches '#include "path"' where the path is made of alphanumeric
// segments separated by '/' or '\'. Group 1 captures the path.
static INCLUDE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"#include\s*"((?:\w+[/\\])*\w+(?:\.\w+)?)""#).unwrap());

// Matches any quoted literal that looks like a file path with an extension.
// Group 1 captures the whole path, group 2 just the extension, which we
// check against the whitelist above.
static RESOURCE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:\w+[/\\])*\w+\.(\w+))""#).unwrap());

// Extracts every referenced path from one source file
//
// Parameters:
//   content: the raw source text
//
// Returns: Vec<String> with include paths first, then whitelisted resource
// literals, each in the order they appear in the text. Duplicates are kept;
// the crawl pipeline deduplicates against its visited registry.
pub fn extract_source_references(content: &str) -> Vec<String> {
    let includes = INCLUDE_DIRECTIVE
        .captures_iter(content)
        .map(|captures| captures[1].to_string());

    // A resource literal only counts when its extension is whitelisted.
    // The comparison is case-insensitive ("Stone.PNG" is still a png).
    let resources = RESOURCE_LITERAL
        .captures_iter(content)
        .filter(|captures| {
            let extension = captures[2].to_ascii_lowercase();
            RESOURCE_EXTENSIONS.contains(&extension.as_str())
        })
        .map(|captures| captures[1].to_string());

    includes.chain(resources).collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A container that runs its initializer exactly once, on first access
//    - After that, every thread reads the same compiled regex
//    - Compiling a regex is expensive; matching with it is cheap and
//      needs no mutable state, so one shared instance is all we need
//
// 2. Why r#"..."# strings?
//    - Raw strings don't process backslash escapes
//    - Regexes are full of backslashes, so this avoids double-escaping
//    - The # lets us put plain double quotes inside the pattern
//
// 3. What does captures_iter return?
//    - An iterator over every non-overlapping match in the text
//    - Each item gives access to the numbered capture groups
//    - captures[1] is the text matched by the first (...) in the pattern
//
// 4. Why chain two iterators?
//    - chain() glues the resource matches onto the end of the includes
//    - One pass, one allocation for the final Vec
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_include_directive() {
        let content = "#include \"util/math.h\"\n#include <vector>\n";
        assert_eq!(extract_source_references(content), vec!["util/math.h"]);
    }

    #[test]
    fn test_angle_bracket_includes_are_ignored() {
        let content = "#include <iostream>\n#include <string>\n";
        assert!(extract_source_references(content).is_empty());
    }

    #[test]
    fn test_resource_literal_without_include() {
        let content = "auto tex = loadTexture(\"diagram.png\");\n";
        assert_eq!(extract_source_references(content), vec!["diagram.png"]);
    }

    #[test]
    fn test_non_whitelisted_literal_is_ignored() {
        let content = "log(\"something.went\"); open(\"data.bin\");\n";
        assert!(extract_source_references(content).is_empty());
    }

    #[test]
    fn test_whitelist_check_is_case_insensitive() {
        let content = "load(\"Stone.PNG\");\n";
        assert_eq!(extract_source_references(content), vec!["Stone.PNG"]);
    }

    #[test]
    fn test_includes_come_before_resources() {
        let content = "load(\"a.png\");\n#include \"b.h\"\n";
        assert_eq!(extract_source_references(content), vec!["b.h", "a.png"]);
    }

    #[test]
    fn test_resource_literal_with_directory() {
        let content = "load(\"textures/wall.bmp\");\n";
        assert_eq!(extract_source_references(content), vec!["textures/wall.bmp"]);
    }

    #[test]
    fn test_backslash_path_in_include() {
        let content = "#include \"util\\math.h\"\n";
        assert_eq!(extract_source_references(content), vec!["util\\math.h"]);
    }
}
