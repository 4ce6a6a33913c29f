// src/crawl/frontier.rs
// =============================================================================
// This module owns the crawl frontier: the FIFO queue of pages waiting to be
// visited, plus the two sets that guarantee no URL is ever enqueued twice.
//
// Why two sets?
// - visited: URLs we have actually fetched and processed (under every alias
//   they were reached by, including the post-redirect URL)
// - pending: URLs currently sitting in the queue
// A URL in either set is refused admission. The pending entry is removed
// when the URL is dequeued; the visit then records the URL (and its redirect
// alias) in both sets. A URL whose fetch *fails* ends up in neither set, so
// a later re-discovery is allowed to try it again.
//
// Rust concepts:
// - VecDeque: double-ended queue; push_back + pop_front gives FIFO order,
//   which is what makes the traversal breadth-first
// - HashSet: O(1) membership checks for the dedup sets
// =============================================================================

use std::collections::{HashSet, VecDeque};

// A pending visit in the frontier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    // Page-counter value when the link was discovered. Provenance only -
    // the loop terminates on the page budget, never on depth.
    pub depth: usize,
    // Canonical URL to visit
    pub url: String,
    // URL of the page the link was discovered on (the seed points at itself)
    pub referrer: String,
}

// The frontier plus its deduplication sets.
//
// Invariant: a URL is enqueued at most once across the lifetime of the
// crawl. Admission does a check-then-insert against both sets with no
// intervening work, which is all the atomicity a single-threaded crawl
// needs.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
    pending: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Pushes the seed URL as the first entry, depth 0
    pub fn seed(&mut self, start_url: &str) {
        self.pending.insert(start_url.to_string());
        self.queue.push_back(FrontierEntry {
            depth: 0,
            url: start_url.to_string(),
            referrer: start_url.to_string(),
        });
    }

    // True if the URL has been visited or is already queued
    pub fn already_seen(&self, url: &str) -> bool {
        self.visited.contains(url) || self.pending.contains(url)
    }

    // Records every alias of a just-visited page (the requested URL and the
    // post-redirect URL) in both sets, so neither form can be re-admitted.
    // All aliases go in together - a page is visited as a unit.
    pub fn mark_visited(&mut self, aliases: &[&str]) {
        for alias in aliases {
            self.visited.insert(alias.to_string());
            self.pending.insert(alias.to_string());
        }
    }

    // Admits a URL into the frontier if neither set has seen it.
    //
    // Returns true if the entry was queued. The check and the insert happen
    // back-to-back so the same URL discovered twice on one page (or on two
    // different pages) is only queued once.
    pub fn admit(&mut self, depth: usize, referrer: &str, url: &str) -> bool {
        if self.already_seen(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        self.queue.push_back(FrontierEntry {
            depth,
            url: url.to_string(),
            referrer: referrer.to_string(),
        });
        true
    }

    // FIFO pop. The URL leaves the pending set here: from this moment it is
    // either about to be recorded as visited, or (on fetch failure) free to
    // be re-discovered.
    pub fn next(&mut self) -> Option<FrontierEntry> {
        let entry = self.queue.pop_front()?;
        self.pending.remove(&entry.url);
        Some(entry)
    }

    // Number of entries still waiting to be visited
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    // Draining: drop everything. Called once the budget is reached so no
    // stale state outlives the crawl.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.visited.clear();
        self.pending.clear();
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not just one set?
//    - A URL can be waiting in the queue long before it is fetched. If we
//      only tracked visited pages, the same URL discovered on two pages
//      would be queued twice and fetched twice.
//
// 2. Why does next() remove the URL from pending?
//    - The visit that follows checks already_seen() on the page's *aliases*
//      (the redirect target may be a page we've seen under another name).
//      If the dequeued URL itself still counted as "seen", every page would
//      look like a duplicate of itself.
//
// 3. What does #[derive(Default)] buy us?
//    - VecDeque and HashSet both default to empty, so Frontier::default()
//      is exactly the "all collections created empty" starting state.
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_first_out() {
        let mut frontier = Frontier::new();
        frontier.seed("http://example.com/a");
        let entry = frontier.next().unwrap();
        assert_eq!(entry.url, "http://example.com/a");
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.referrer, "http://example.com/a");
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.admit(0, "http://example.com/a", "http://example.com/b");
        frontier.admit(0, "http://example.com/a", "http://example.com/c");
        frontier.admit(1, "http://example.com/b", "http://example.com/d");
        assert_eq!(frontier.next().unwrap().url, "http://example.com/b");
        assert_eq!(frontier.next().unwrap().url, "http://example.com/c");
        assert_eq!(frontier.next().unwrap().url, "http://example.com/d");
        assert!(frontier.next().is_none());
    }

    #[test]
    fn test_url_is_enqueued_at_most_once() {
        let mut frontier = Frontier::new();
        assert!(frontier.admit(0, "http://example.com/a", "http://example.com/b"));
        // Same URL discovered again, even from a different page
        assert!(!frontier.admit(1, "http://example.com/c", "http://example.com/b"));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_visited_url_is_refused() {
        let mut frontier = Frontier::new();
        frontier.mark_visited(&["http://example.com/b"]);
        assert!(!frontier.admit(0, "http://example.com/a", "http://example.com/b"));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_dequeued_url_leaves_pending() {
        let mut frontier = Frontier::new();
        frontier.admit(0, "http://example.com/a", "http://example.com/b");
        let entry = frontier.next().unwrap();
        // Not visited yet, not pending anymore: a failed fetch leaves the
        // URL free to be re-discovered later
        assert!(!frontier.already_seen(&entry.url));
    }

    #[test]
    fn test_aliases_are_marked_together() {
        let mut frontier = Frontier::new();
        frontier.mark_visited(&["http://example.com/b", "http://example.com/b/index.html"]);
        assert!(frontier.already_seen("http://example.com/b"));
        assert!(frontier.already_seen("http://example.com/b/index.html"));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut frontier = Frontier::new();
        frontier.seed("http://example.com/a");
        frontier.mark_visited(&["http://example.com/b"]);
        frontier.clear();
        assert!(frontier.is_empty());
        assert!(!frontier.already_seen("http://example.com/b"));
    }
}
