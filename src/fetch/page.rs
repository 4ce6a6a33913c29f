// src/fetch/page.rs
// =============================================================================
// This module reads things out of a fetched HTML document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Two views of a page matter to the crawler:
// - anchor_hrefs: every <a href> value, in document order (the frontier is
//   FIFO, so document order here is the tie-break order of the traversal)
// - paragraph_text: the concatenated text of <p> elements, for the word
//   report downstream
// =============================================================================

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

// Extracts every anchor href from the page, in document order.
//
// The hrefs come back raw - relative paths, fragments, mailto: and all.
// Normalization is the crawl module's job.
//
// Returns Err only if the selector machinery itself fails; the crawl loop
// treats that as "zero links extracted from this page".
pub fn anchor_hrefs(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("a[href]").map_err(|e| anyhow!("bad anchor selector: {:?}", e))?;

    let hrefs = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect();

    Ok(hrefs)
}

// Concatenated text of the page's <p> elements, newline-normalized.
//
// Example:
//   "<p>Hello\nworld</p><p>again</p>" -> "Hello world again "
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("p") {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    let mut text = String::new();
    for element in document.select(&selector) {
        for piece in element.text() {
            text.push_str(piece);
        }
        text.push(' ');
    }

    text.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_in_document_order() {
        let html = r#"
            <a href="/first">1</a>
            <p>filler</p>
            <a href="/second">2</a>
            <a href="mailto:x@y.com">3</a>
        "#;
        let hrefs = anchor_hrefs(html).unwrap();
        assert_eq!(hrefs, vec!["/first", "/second", "mailto:x@y.com"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">anchor</a><a href="/real">link</a>"#;
        let hrefs = anchor_hrefs(html).unwrap();
        assert_eq!(hrefs, vec!["/real"]);
    }

    #[test]
    fn test_paragraph_text_concatenates() {
        let html = "<p>Hello world</p><p>Second paragraph</p>";
        assert_eq!(paragraph_text(html), "Hello world Second paragraph ");
    }

    #[test]
    fn test_paragraph_text_normalizes_newlines() {
        let html = "<p>line one\nline two</p>";
        assert_eq!(paragraph_text(html), "line one line two ");
    }

    #[test]
    fn test_no_paragraphs_yields_empty() {
        assert_eq!(paragraph_text("<div>not a paragraph</div>"), "");
    }
}
