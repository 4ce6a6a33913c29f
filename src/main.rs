// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the crawl configuration (deriving the domain if none was given)
// 3. Run the crawl
// 4. Print the report (table or JSON) and optionally write the CSV files
// 5. Exit with proper code (0 = clean, 1 = failures recorded, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl is network-bound, so it runs on tokio
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - frontier, admission, crawl loop
mod fetch; // src/fetch/ - HTTP fetching and HTML page access
mod output; // src/output.rs - CSV writing
mod text; // src/text.rs - word cleaning for the report

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use url::Url;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{anyhow, Result};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished with no failed fetches
//   Ok(1) = crawl finished but some fetches failed
//   Err = unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // The limiting domain defaults to the host of the start URL
    let domain = match cli.domain {
        Some(domain) => domain,
        None => Url::parse(&cli.start_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .ok_or_else(|| anyhow!("Cannot derive a domain from '{}'", cli.start_url))?,
    };

    let config = crawl::CrawlConfig {
        start_url: cli.start_url,
        page_budget: cli.pages,
        domain,
        path_prefix: cli.path_prefix,
        ignore_terms: cli.ignore_terms,
    };

    println!("🔍 Crawling {} (domain: {})", config.start_url, config.domain);
    if !config.path_prefix.is_empty() {
        println!("📂 Limited to paths containing '{}'", config.path_prefix);
    }
    println!("📊 Page budget: {}\n", config.page_budget);

    let fetcher = fetch::HttpFetcher::new()?;
    let report = crawl::crawl(&fetcher, &config).await?;

    print_report(&report, cli.json)?;

    if let Some(dir) = cli.output {
        let paths = output::write_report(&report, &dir)?;
        println!("\n💾 Wrote:");
        for path in paths {
            println!("   {}", path.display());
        }
    }

    if report.failures.is_empty() {
        Ok(0) // Exit code 0 = clean crawl
    } else {
        Ok(1) // Exit code 1 = some fetches failed
    }
}

// Prints the report either as a summary table or JSON
fn print_report(report: &crawl::CrawlReport, json: bool) -> Result<()> {
    if json {
        // Serialize the whole report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_summary(report);
    }
    Ok(())
}

// Prints a human-readable summary in the terminal
fn print_summary(report: &crawl::CrawlReport) {
    println!("\n📊 Summary:");
    println!("   📄 Pages visited: {}", report.visited.len());
    println!("   📑 PDF links found: {}", report.pdf_links.len());
    println!("   ❌ Failed fetches: {}", report.failures.len());

    if !report.failures.is_empty() {
        println!("\n❌ Failures:");
        println!("{:<60} {:<60}", "FOUND ON", "TARGET");
        println!("{}", "=".repeat(120));
        for failure in &report.failures {
            println!(
                "{:<60} {:<60}",
                truncate(&failure.from_url, 57),
                truncate(&failure.target_url, 57)
            );
        }
    }

    if !report.pdf_links.is_empty() {
        println!("\n📑 PDF links:");
        for url in &report.pdf_links {
            println!("   {}", url);
        }
    }
}

// Truncates a URL for table display.
//
// URLs can legally contain multi-byte UTF-8, so we cut by characters, not
// bytes - slicing at a fixed byte offset would panic mid-character.
fn truncate(url: &str, max: usize) -> String {
    if url.chars().count() > max {
        let shown: String = url.chars().take(max).collect();
        format!("{}...", shown)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_url() {
        assert_eq!(truncate("http://a.com", 57), "http://a.com");
    }

    #[test]
    fn test_truncate_long_url() {
        let long = format!("http://example.com/{}", "x".repeat(100));
        let shown = truncate(&long, 57);
        assert_eq!(shown.len(), 60);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_url() {
        // Percent-free UTF-8 paths are valid in hrefs; cutting one at a raw
        // byte offset would land inside a character
        let long = format!("http://example.com/x{}", "é".repeat(60));
        let shown = truncate(&long, 57);
        assert_eq!(shown.chars().count(), 60);
        assert!(shown.ends_with("..."));
    }
}
