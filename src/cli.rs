// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-harvester",
    version = "0.1.0",
    about = "A CLI crawler that harvests page text, PDF links, and broken fetches from one website domain",
    long_about = "site-harvester crawls a website breadth-first from a start URL, staying inside one \
                  domain (and optionally one path prefix). It collects the paragraph text of every \
                  visited page, every PDF link it sees, and every fetch that fails."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., https://example.com/depts/)
    ///
    /// This is a positional argument (required, no flag needed)
    pub start_url: String,

    /// Maximum number of pages to visit
    ///
    /// Failed fetches and duplicate arrivals don't count against this
    #[arg(long, default_value_t = 50, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub pages: usize,

    /// Domain to restrict the crawl to (default: the start URL's host)
    ///
    /// Subdomains are included: --domain example.com also admits
    /// docs.example.com
    #[arg(long)]
    pub domain: Option<String>,

    /// Only follow URLs whose path contains this string
    #[arg(long, default_value = "")]
    pub path_prefix: String,

    /// Skip URLs containing this substring (repeat the flag for more terms)
    #[arg(long = "ignore", value_name = "TERM")]
    pub ignore_terms: Vec<String>,

    /// Output the crawl report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Directory to write visited.csv, failures.csv, and pdf_links.csv into
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}
