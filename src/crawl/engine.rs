// src/crawl/engine.rs
// =============================================================================
// This module runs the crawl: a loop that drains the frontier under a
// page-count budget.
//
// How one iteration works:
// 1. Pop the next entry off the frontier (empty frontier ends the crawl)
// 2. Fetch it. Failure -> record (referrer, url) and move on
// 3. Skip if the page was already visited under either its requested or its
//    post-redirect URL (it was reachable via more than one path)
// 4. Mark both URLs visited, extract the page's anchors, normalize each,
//    sink .pdf links, admit the survivors into the frontier
// 5. Record the visit and count the page against the budget
//
// Failed fetches and duplicate arrivals do NOT count against the budget -
// only successfully processed pages do. Once the budget is reached the crawl
// drains: the frontier is cleared and nothing mutates afterwards.
//
// Every per-URL problem stays inside its own iteration. The only errors that
// escape this module are catastrophic ones (and allocation failure aborts
// long before an Err could be built).
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use url::Url;

use super::admit::is_admissible;
use super::frontier::Frontier;
use super::normalize::normalize;
use crate::fetch::{page, Fetcher};

// Immutable settings for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    // Absolute URL the crawl starts from
    pub start_url: String,
    // Maximum number of successfully processed pages
    pub page_budget: usize,
    // Limiting domain; subdomains are included
    pub domain: String,
    // Required substring of admitted URL paths ("" = no restriction)
    pub path_prefix: String,
    // URLs containing any of these substrings are never followed
    pub ignore_terms: Vec<String>,
}

// One successfully visited page
#[derive(Debug, Clone, Serialize)]
pub struct VisitRecord {
    // Page-counter value when the page was processed (0-based)
    pub page: usize,
    // The URL as it was requested
    pub url: String,
    // Newline-normalized paragraph text of the page
    pub text: String,
}

// One failed fetch. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    // Page the link was discovered on
    pub from_url: String,
    // URL that failed to fetch
    pub target_url: String,
}

// Everything a crawl produces, ready for printing or writing
#[derive(Debug, Default, Serialize)]
pub struct CrawlReport {
    pub visited: Vec<VisitRecord>,
    pub failures: Vec<FailureRecord>,
    pub pdf_links: Vec<String>,
}

// Crawls from config.start_url until the page budget is reached or the
// frontier runs dry, whichever comes first.
//
// The fetcher is generic so tests can drive the loop with an in-memory fake.
pub async fn crawl<F: Fetcher>(fetcher: &F, config: &CrawlConfig) -> Result<CrawlReport> {
    let mut frontier = Frontier::new();
    frontier.seed(&config.start_url);

    let mut report = CrawlReport::default();
    let mut page_counter = 0;

    while page_counter < config.page_budget {
        // Frontier exhausted before the budget: nothing left to do
        let Some(entry) = frontier.next() else {
            break;
        };

        let fetched = match fetcher.fetch(&entry.url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                eprintln!("  ⚠️  Failed to fetch {}: {}", entry.url, e);
                report.failures.push(FailureRecord {
                    from_url: entry.referrer.clone(),
                    target_url: entry.url.clone(),
                });
                continue;
            }
        };

        // A redirect may have landed us on a page we already processed under
        // another name. Requested and true URL both have to be new.
        if frontier.already_seen(&fetched.true_url) || frontier.already_seen(&entry.url) {
            continue;
        }

        // The page is visited under every name it answers to
        frontier.mark_visited(&[&entry.url, &fetched.true_url]);

        // An extraction problem costs us this page's links, not the crawl
        let hrefs = match page::anchor_hrefs(&fetched.html) {
            Ok(hrefs) => hrefs,
            Err(e) => {
                eprintln!("  ⚠️  Link extraction failed on {}: {}", entry.url, e);
                Vec::new()
            }
        };

        for href in &hrefs {
            // Normalize against the true URL - relative links on a
            // redirected page are relative to where we ended up
            let Some(link) = normalize(&fetched.true_url, href) else {
                continue;
            };

            // PDFs are collected, never followed. This happens before
            // admission on purpose: the filter would reject them.
            if has_pdf_path(&link) {
                report.pdf_links.push(link.clone());
            }

            if is_admissible(&link, &config.domain, &config.path_prefix, &config.ignore_terms) {
                frontier.admit(page_counter, &entry.url, &link);
            }
        }

        report.visited.push(VisitRecord {
            page: page_counter,
            url: entry.url.clone(),
            text: page::paragraph_text(&fetched.html),
        });
        page_counter += 1;

        println!(
            "  📄 [{}/{}] {} (found on page {}, {} queued)",
            page_counter,
            config.page_budget,
            entry.url,
            entry.depth,
            frontier.len()
        );
    }

    // Draining: the crawl is over, release everything
    if !frontier.is_empty() {
        println!("  🧹 Dropping {} queued URLs (budget reached)", frontier.len());
    }
    frontier.clear();

    Ok(report)
}

// Does the URL's path end in .pdf?
fn has_pdf_path(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| parsed.path().ends_with(".pdf"))
        .unwrap_or(false)
}
