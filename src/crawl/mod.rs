// src/crawl/mod.rs
// =============================================================================
// This module is the crawler core.
//
// Submodules:
// - normalize: turns raw hrefs into canonical absolute URLs
// - admit: decides which canonical URLs may enter the frontier
// - frontier: the FIFO queue + dedup sets (each URL enqueued at most once)
// - engine: the loop that ties it all together under a page budget
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `crawl::crawl(...)` instead of reaching into submodules.
// =============================================================================

mod admit;
mod engine;
mod frontier;
mod normalize;

pub use engine::{crawl, CrawlConfig, CrawlReport, FailureRecord, VisitRecord};
