// src/fetch/http.rs
// =============================================================================
// This module implements Fetcher over a real HTTP client.
//
// Key behaviour:
// - 10 second timeout per request (a hung server must not hang the crawl)
// - Follows redirects and reports the final URL, so the engine can
//   deduplicate a page under both the requested and the redirected name
// - 403 Forbidden and 404 Not Found are failures; other status codes still
//   yield whatever body the server sent
//
// Rust concepts:
// - reqwest::Client is cheap to clone and pools connections internally,
//   so one client serves the whole crawl
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::{FetchedPage, Fetcher};

// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the client used for every request of the crawl
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("site-harvester/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;

        // These two codes mean "there is no page here for you"
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN {
            return Err(anyhow!("HTTP {} for {}", status.as_u16(), url));
        }

        // The response URL is the post-redirect ("true") URL
        let true_url = response.url().to_string();
        let html = response.text().await?;

        Ok(FetchedPage { true_url, html })
    }
}
