// src/crawl/source_file.rs
// =============================================================================
// This module defines SourceFile, the entity that travels through the
// crawl pipeline.
//
// A SourceFile starts as just a relative path (when it's seeded or
// discovered inside another file), gains its content when the fetch stage
// succeeds, and finally knows where on the local disk it belongs.
//
// Path handling:
// - The remote host addresses files with '/'-separated relative paths
// - References found in source text sometimes use '\' instead
// - We normalize everything to '/' on construction, so two spellings of
//   the same file deduplicate to one entry in the visited registry
// - Only when building the local output path do we switch to the
//   platform's own separator (via PathBuf)
//
// Rust concepts:
// - Option<String>: content is absent until the fetch stage fills it in
// - PathBuf: Owned, platform-aware filesystem paths
// =============================================================================

use std::path::{Path, PathBuf};

// One file of the remote project, somewhere between "referenced" and
// "written to disk"
#[derive(Debug, Clone)]
pub struct SourceFile {
    // Normalized '/'-separated path relative to the project root,
    // e.g. "util/math.h". This is the deduplication key.
    relative_url: String,
    // Last segment of the relative path, e.g. "math.h"
    file_name: String,
    // Fetched content; None until the fetch stage succeeds
    source: Option<String>,
}

impl SourceFile {
    // Creates a SourceFile from a relative path as found in source text
    //
    // Normalizes directory separators so "a\b.h" and "a/b.h" become the
    // same entity.
    pub fn new(relative_path: &str) -> Self {
        let relative_url = relative_path.replace('\\', "/");
        let file_name = relative_url
            .rsplit('/')
            .next()
            .unwrap_or(&relative_url)
            .to_string();

        Self {
            relative_url,
            file_name,
            source: None,
        }
    }

    /// The normalized '/'-separated path, used for URLs and deduplication
    pub fn relative_url(&self) -> &str {
        &self.relative_url
    }

    /// The file's own name (last path segment)
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The fetched content, if the fetch stage has run successfully
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Attaches fetched content to this entity
    pub fn set_source(&mut self, source: String) {
        self.source = Some(source);
    }

    // Maps this file to its place in the local mirror
    //
    // Example: root="out", relative path "util/math.h"
    //   -> out/util/math.h (with platform separators)
    //
    // Dot and empty segments are skipped: a reference like "../../x.h"
    // must not place a file outside the mirror root.
    pub fn local_path(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in self.relative_url.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                continue;
            }
            path.push(segment);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_name_from_directory() {
        let file = SourceFile::new("util/math.h");
        assert_eq!(file.relative_url(), "util/math.h");
        assert_eq!(file.file_name(), "math.h");
    }

    #[test]
    fn test_bare_file_name() {
        let file = SourceFile::new("makefile");
        assert_eq!(file.relative_url(), "makefile");
        assert_eq!(file.file_name(), "makefile");
    }

    #[test]
    fn test_backslashes_normalize_to_slashes() {
        let windows_style = SourceFile::new("a\\b.h");
        let unix_style = SourceFile::new("a/b.h");
        assert_eq!(windows_style.relative_url(), unix_style.relative_url());
        assert_eq!(windows_style.file_name(), "b.h");
    }

    #[test]
    fn test_local_path_nests_under_root() {
        let file = SourceFile::new("util/math.h");
        let path = file.local_path(Path::new("out"));
        let expected: PathBuf = ["out", "util", "math.h"].iter().collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_parent_segments_cannot_escape_root() {
        let file = SourceFile::new("../../x.h");
        let path = file.local_path(Path::new("out"));
        let expected: PathBuf = ["out", "x.h"].iter().collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_source_starts_absent() {
        let mut file = SourceFile::new("main.cpp");
        assert!(file.source().is_none());
        file.set_source("int main() {}".to_string());
        assert_eq!(file.source(), Some("int main() {}"));
    }
}
