// src/output.rs
// =============================================================================
// This module writes the crawl's three output streams to CSV files:
//
// - visited.csv:   page, url, words     (words = cleaned paragraph text)
// - failures.csv:  from_url, target_url
// - pdf_links.csv: url
//
// The csv crate handles quoting and escaping, so URLs and free text with
// commas in them come out intact.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::crawl::CrawlReport;
use crate::text::clean_words;

// Writes the full report into `dir`, creating it if needed.
//
// Returns the paths written, for the summary printout.
pub fn write_report(report: &CrawlReport, dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create output directory {}", dir.display()))?;

    let visited_path = dir.join("visited.csv");
    let failures_path = dir.join("failures.csv");
    let pdfs_path = dir.join("pdf_links.csv");

    write_visited(report, &visited_path)?;
    write_failures(report, &failures_path)?;
    write_pdf_links(report, &pdfs_path)?;

    Ok(vec![visited_path, failures_path, pdfs_path])
}

fn write_visited(report: &CrawlReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("could not create {}", path.display()))?;

    writer.write_record(["page", "url", "words"])?;
    for visit in &report.visited {
        let words = clean_words(&visit.text).join(" ");
        writer.write_record([visit.page.to_string().as_str(), &visit.url, &words])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_failures(report: &CrawlReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("could not create {}", path.display()))?;

    writer.write_record(["from_url", "target_url"])?;
    for failure in &report.failures {
        writer.write_record([&failure.from_url, &failure.target_url])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_pdf_links(report: &CrawlReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("could not create {}", path.display()))?;

    writer.write_record(["url"])?;
    for url in &report.pdf_links {
        writer.write_record([url])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::{FailureRecord, VisitRecord};

    fn sample_report() -> CrawlReport {
        CrawlReport {
            visited: vec![VisitRecord {
                page: 0,
                url: "http://example.com/a".to_string(),
                text: "The city budget, for 2024 ".to_string(),
            }],
            failures: vec![FailureRecord {
                from_url: "http://example.com/a".to_string(),
                target_url: "http://example.com/b".to_string(),
            }],
            pdf_links: vec!["http://example.com/report.pdf".to_string()],
        }
    }

    #[test]
    fn test_write_report_creates_all_files() {
        // Per-process directory so concurrent test runs don't collide
        let dir = std::env::temp_dir().join(format!(
            "site-harvester-output-test-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);

        let paths = write_report(&sample_report(), &dir).unwrap();
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert!(path.exists(), "{} was not written", path.display());
        }

        let visited = fs::read_to_string(&paths[0]).unwrap();
        assert!(visited.starts_with("page,url,words"));
        assert!(visited.contains("0,http://example.com/a,city budget"));

        let failures = fs::read_to_string(&paths[1]).unwrap();
        assert!(failures.contains("http://example.com/a,http://example.com/b"));

        let pdfs = fs::read_to_string(&paths[2]).unwrap();
        assert!(pdfs.contains("http://example.com/report.pdf"));

        let _ = fs::remove_dir_all(&dir);
    }
}
