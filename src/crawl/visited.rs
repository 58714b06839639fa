// src/crawl/visited.rs
// =============================================================================
// This module implements the visited registry: the one piece of state
// shared across every branch of a crawl.
//
// Why it exists:
// - Source files reference each other freely (A includes B, B includes A,
//   two files both include common.h)
// - Without a shared "already claimed" set, the crawl would fetch the same
//   file many times and never terminate on reference cycles
//
// The registry is claimed-at-fetch-time: a path goes in the moment a fetch
// is attempted, before the fetch completes, so a concurrently discovered
// duplicate reference sees the claim and backs off. Entries are never
// removed - the registry lives exactly as long as its top-level crawl.
//
// Rust concepts:
// - Arc: Shared ownership across concurrent tasks (cloning is cheap, it
//   just bumps a reference count)
// - Mutex: Only one task mutates the set at a time
// - HashSet: O(1) membership checks on relative paths
// =============================================================================

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// The shared set of relative paths already claimed for fetching.
//
// Clone freely: every clone is a handle onto the same underlying set, so
// nested crawls all see each other's claims.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    paths: Arc<Mutex<HashSet<String>>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Claims a path for fetching
    //
    // Returns true if this caller is the first to claim it (and should go
    // ahead and fetch), false if some other branch of the crawl got there
    // first. Insert and check happen under one lock acquisition, so two
    // tasks can never both win the claim.
    pub fn claim(&self, path: &str) -> bool {
        self.paths
            .lock()
            .expect("visited registry lock poisoned")
            .insert(path.to_string())
    }

    /// Checks membership without claiming (used when filtering discovered
    /// references before seeding a nested crawl)
    pub fn contains(&self, path: &str) -> bool {
        self.paths
            .lock()
            .expect("visited registry lock poisoned")
            .contains(path)
    }

    /// Number of paths claimed so far
    pub fn len(&self) -> usize {
        self.paths
            .lock()
            .expect("visited registry lock poisoned")
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_wins() {
        let visited = VisitedSet::new();
        assert!(visited.claim("main.cpp"));
        assert!(!visited.claim("main.cpp"));
    }

    #[test]
    fn test_clones_share_the_same_set() {
        let visited = VisitedSet::new();
        let handle = visited.clone();
        assert!(visited.claim("util.h"));
        assert!(!handle.claim("util.h"));
        assert!(handle.contains("util.h"));
    }

    #[test]
    fn test_contains_does_not_claim() {
        let visited = VisitedSet::new();
        assert!(!visited.contains("main.cpp"));
        assert!(visited.claim("main.cpp"));
    }

    #[test]
    fn test_len_counts_distinct_paths() {
        let visited = VisitedSet::new();
        visited.claim("a.h");
        visited.claim("b.h");
        visited.claim("a.h");
        assert_eq!(visited.len(), 2);
    }
}
