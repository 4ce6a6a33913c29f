// src/fetch/mod.rs
// =============================================================================
// This module handles fetching and reading web pages.
//
// Submodules:
// - http: reqwest-backed fetcher that talks to the real network
// - page: read-only access to a fetched HTML document (links, text)
//
// The Fetcher trait is the seam between the crawl engine and the network.
// The engine is generic over it, which is what lets the tests drive a whole
// crawl through an in-memory fake without opening a socket.
// =============================================================================

mod http;
pub mod page;

pub use http::HttpFetcher;

use anyhow::Result;

// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    // Final URL after following redirects - may differ from the requested one
    pub true_url: String,
    // Raw HTML body
    pub html: String,
}

// Anything that can turn a URL into a page.
//
// An Err return means the fetch failed (network error, or a disallowed
// status code like 403/404). The crawl engine records failures and moves on.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<FetchedPage>> + Send;
}
