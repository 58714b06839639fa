// src/crawl/pipeline.rs
// =============================================================================
// This module implements the mirror crawl itself: a three-stage pipeline
// that every file flows through.
//
//   fetch    - claim the path in the visited registry, download content
//   discover - extract references, crawl the new ones, wait for them
//   persist  - write the file into the local mirror, notify the sink
//
// How the recursion works:
// 1. A crawl is seeded with one or more relative paths (usually just the
//    entry file, "makefile")
// 2. Each seeded file runs through the three stages
// 3. When the discover stage finds references that nobody has claimed
//    yet, it starts a nested crawl over exactly those paths - sharing the
//    same visited registry - and waits for it to fully drain before the
//    file moves on to persist
// 4. So when run() returns, every transitively discovered file has either
//    been written to disk or definitively dropped; nothing dangles
//
// Failure policy (best-effort mirroring):
// - A failed fetch drops that file and everything only reachable through
//   it; the crawl never aborts
// - The one exception: if the crawl's designated entry file fails, we
//   fall back to a fixed alternate entry ("main.cpp") and crawl from there
// - A failed disk write drops just that file
// - Both kinds of failure are counted and warned about, never fatal
//
// Rust concepts:
// - BoxFuture: An async fn can't call itself recursively without boxing
//   (the future type would contain itself), so crawl() returns Box::pin
// - join_all: Runs every per-file future concurrently and waits for all
//   of them - there's no ordering across files, only within one file
// - AtomicUsize: Failure counters updated from concurrent branches
// =============================================================================

use crate::crawl::fetch::Fetcher;
use crate::crawl::source_file::SourceFile;
use crate::crawl::visited::VisitedSet;
use crate::extract::extract_references;
use futures::future::{self, BoxFuture};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The conventional entry file a crawl starts from
pub const DEFAULT_ENTRY: &str = "makefile";

/// Where we look when the entry file itself can't be fetched
pub const FALLBACK_ENTRY: &str = "main.cpp";

// Called once per successfully persisted file with its logical path
// ("{project}/{relative path}"), e.g. for console progress reporting
pub type FileSavedSink = Arc<dyn Fn(&str) + Send + Sync>;

// Coordinates one top-level crawl of a remote project
//
// Owns the wiring (project, host, output root, fetcher, sink) and the
// shared visited registry. All the per-file state lives in the
// SourceFile entities flowing through the stages.
pub struct Mirror {
    project: String,
    // Always ends with '/' - normalized in new()
    host_url: String,
    output_root: PathBuf,
    fetcher: Arc<dyn Fetcher>,
    visited: VisitedSet,
    on_file_saved: Option<FileSavedSink>,
    fetch_failures: AtomicUsize,
    persist_failures: AtomicUsize,
}

impl Mirror {
    pub fn new(project: &str, host_url: &str, fetcher: Arc<dyn Fetcher>) -> Self {
        // Guarantee the trailing slash so URL assembly below can simply
        // concatenate host + project + path
        let host_url = if host_url.ends_with('/') {
            host_url.to_string()
        } else {
            format!("{}/", host_url)
        };

        Self {
            project: project.to_string(),
            host_url,
            output_root: PathBuf::from("."),
            fetcher,
            visited: VisitedSet::new(),
            on_file_saved: None,
            fetch_failures: AtomicUsize::new(0),
            persist_failures: AtomicUsize::new(0),
        }
    }

    /// Sets where the local mirror is written (default: current directory).
    /// Files land under {output_root}/{project}/...
    pub fn output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Installs the completion sink, invoked once per persisted file
    pub fn on_file_saved(mut self, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_file_saved = Some(Arc::new(sink));
        self
    }

    // Crawls the project starting from a single entry file
    //
    // This is the usual way in: seed the entry path (conventionally
    // "makefile") and let discovery find everything else. The entry file
    // is the only one whose fetch failure triggers the fallback crawl.
    //
    // Returns once every transitively discovered file has been persisted
    // or dropped.
    pub async fn run(&self, entry_path: &str) {
        let entry = SourceFile::new(entry_path);
        let designated = entry.relative_url().to_string();
        self.crawl(vec![entry], Some(designated)).await;
    }

    /// Crawls from an arbitrary set of seed paths, none of which gets
    /// entry-fallback treatment
    pub async fn run_seeds(&self, paths: &[String]) {
        let seeds = paths.iter().map(|path| SourceFile::new(path)).collect();
        self.crawl(seeds, None).await;
    }

    /// How many distinct paths the crawl claimed for fetching
    pub fn files_claimed(&self) -> usize {
        self.visited.len()
    }

    /// How many fetches failed during the crawl
    pub fn fetch_failures(&self) -> usize {
        self.fetch_failures.load(Ordering::Relaxed)
    }

    /// How many disk writes failed during the crawl
    pub fn persist_failures(&self) -> usize {
        self.persist_failures.load(Ordering::Relaxed)
    }

    // One crawl over a batch of seed files
    //
    // Every seed progresses through the stages concurrently with the
    // others; the returned future resolves when all of them (and every
    // nested crawl they spawned) are done.
    //
    // Boxed because process() awaits crawl() for nested discoveries and
    // for the entry fallback - without the Box the future type would be
    // infinitely recursive.
    fn crawl<'a>(&'a self, seeds: Vec<SourceFile>, entry: Option<String>) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let work = seeds
                .into_iter()
                .map(|file| self.process(file, entry.clone()));
            future::join_all(work).await;
        })
    }

    // Drives one file through fetch -> discover -> persist
    //
    // These three steps are strictly sequential for this file; everything
    // else in the crawl runs concurrently around them.
    async fn process(&self, mut file: SourceFile, entry: Option<String>) {
        // --- Fetch stage ---
        // Claim before fetching: a duplicate reference discovered while
        // this download is still in flight must see the claim and back off.
        if !self.visited.claim(file.relative_url()) {
            return;
        }

        let url = format!("{}{}/{}", self.host_url, self.project, file.relative_url());
        match self.fetcher.fetch(&url).await {
            Ok(content) => file.set_source(content),
            Err(e) => {
                self.fetch_failures.fetch_add(1, Ordering::Relaxed);
                eprintln!("  Warning: failed to fetch {}: {}", url, e);

                // Only the crawl's designated entry gets a second chance:
                // fall back to the alternate entry and crawl from there.
                // The fallback crawl carries no entry designation of its
                // own, so a failing fallback doesn't cascade.
                if entry.as_deref() == Some(file.relative_url()) {
                    self.crawl(vec![SourceFile::new(FALLBACK_ENTRY)], None)
                        .await;
                }
                return;
            }
        }

        // --- Discovery stage ---
        // Crawl whatever this file references that nobody claimed yet, and
        // wait for that whole sub-crawl to drain before persisting.
        let discovered = self.discover(&file);
        if !discovered.is_empty() {
            self.crawl(discovered, None).await;
        }

        // --- Persist stage ---
        self.persist(&file).await;
    }

    // Extracts this file's references and keeps the ones worth crawling
    //
    // Normalization happens inside SourceFile::new, so "a\b.h" and
    // "a/b.h" collapse before the visited check. In-batch duplicates are
    // dropped here too; cross-batch duplicates are handled by the claim
    // in the fetch stage.
    fn discover(&self, file: &SourceFile) -> Vec<SourceFile> {
        let Some(source) = file.source() else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        extract_references(file.file_name(), source)
            .into_iter()
            .map(|reference| SourceFile::new(&reference))
            .filter(|candidate| !self.visited.contains(candidate.relative_url()))
            .filter(|candidate| seen.insert(candidate.relative_url().to_string()))
            .collect()
    }

    // Writes one fetched file into the local mirror
    //
    // Target: {output_root}/{project}/{relative dir}/{file name}, creating
    // intermediate directories as needed, overwriting what's there. Write
    // failures are counted and warned about but never fail the crawl.
    async fn persist(&self, file: &SourceFile) {
        let Some(source) = file.source() else {
            return;
        };

        let project_root = self.output_root.join(&self.project);
        let path = file.local_path(&project_root);

        let written = async {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, source).await
        }
        .await;

        match written {
            Ok(()) => {
                if let Some(sink) = &self.on_file_saved {
                    sink(&format!("{}/{}", self.project, file.relative_url()));
                }
            }
            Err(e) => {
                self.persist_failures.fetch_add(1, Ordering::Relaxed);
                eprintln!("  Warning: failed to write {}: {}", path.display(), e);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does crawl() return BoxFuture?
//    - process() awaits crawl() (for nested discoveries), and crawl()
//      awaits process() - mutual recursion
//    - The compiler builds one concrete type per async fn; a future that
//      contains itself would be infinitely large
//    - Box::pin puts the nested future on the heap, breaking the cycle
//
// 2. Why join_all and not spawn?
//    - join_all runs all the per-file futures concurrently inside the
//      current task and borrows &self without any 'static gymnastics
//    - The work is network/disk bound, so cooperative concurrency on one
//      task is exactly as fast as spawning here
//    - There is deliberately no concurrency limit - the reference trees
//      are small and the registry bounds total work
//
// 3. Why claim before fetching, not after?
//    - Two files often reference the same header and are parsed at the
//      same time
//    - Claiming first means the second discovery sees the path as taken
//      while the first download is still in flight
//
// 4. Why Ordering::Relaxed on the counters?
//    - They're simple event counts with no other memory depending on them
//    - Relaxed is enough for "how many failures happened"
// -----------------------------------------------------------------------------
