// src/crawl/normalize.rs
// =============================================================================
// This module canonicalizes raw href values found on a page into absolute,
// fragment-free URLs.
//
// How it works:
// 1. Strip the fragment (#section) - it never changes which page we fetch
// 2. Reject things that aren't followable links (mailto:, javascript:, etc.)
// 3. Absolute hrefs pass through unchanged
// 4. Everything else is resolved against the URL of the page it was found on
//
// One quirk worth knowing about: some sites write links like
// "www.example.com/page" or "foo.edu/page" without a scheme. A strict URL
// parser treats those as relative paths, which resolves them to nonsense like
// "http://example.com/www.example.com/page". We sniff that case by looking at
// the last four characters of the first path segment and prefix "http://"
// when they look like a top-level domain. It is a heuristic, not a parser -
// but it decides which links get followed, so don't swap it for a stricter
// one without expecting the crawl to change shape.
//
// Rust concepts:
// - Option<String>: "a canonical URL, or nothing followable here"
// - The url crate's join() implements standard relative-URL resolution
// =============================================================================

use url::Url;

// TLD suffixes that mark a bare "domain.tld/..." href as missing its scheme
const BARE_DOMAIN_SUFFIXES: [&str; 4] = [".edu", ".org", ".com", ".net"];

// Canonicalizes a raw href relative to the page it was found on.
//
// Parameters:
//   base_url: absolute URL of the page the href was found on
//   raw_href: the href attribute value, exactly as it appeared
//
// Returns: Some(absolute fragment-free URL), or None if the href is not a
// followable link or cannot be resolved.
//
// Examples:
//   normalize("http://example.com/a", "/b") -> Some("http://example.com/b")
//   normalize("http://example.com/a", "www.example.com/c")
//       -> Some("http://www.example.com/c")
//   normalize("http://example.com/a", "mailto:x@y.com") -> None
pub fn normalize(base_url: &str, raw_href: &str) -> Option<String> {
    // The fragment is client-side only; everything after '#' goes
    let href = raw_href.split('#').next().unwrap_or("");

    // Filter out non-links. These are substring checks, not prefix checks:
    // an '@' anywhere marks an email-ish href.
    if href.is_empty()
        || href.contains("mailto:")
        || href.contains("javascript:")
        || href.contains('@')
    {
        return None;
    }

    // Without an absolute base there is nothing to resolve against
    if !is_absolute(base_url) {
        return None;
    }

    // Already absolute? Pass it through untouched
    if is_absolute(href) {
        return Some(href.to_string());
    }

    // Missing-scheme sniff: "foo.edu/bar" or "www.foo.com/bar" are almost
    // certainly bare domains, not relative paths
    let path = href.split('?').next().unwrap_or(href);
    let first_segment = path.split('/').next().unwrap_or("");
    let looks_like_domain = BARE_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| first_segment.ends_with(suffix));

    if looks_like_domain || href.starts_with("www") {
        return Some(format!("http://{}", href));
    }

    // Genuinely relative: resolve against the base the standard way
    let base = Url::parse(base_url).ok()?;
    base.join(href).ok().map(|resolved| resolved.to_string())
}

// Does this string have a network-location component?
//
// Mirrors "netloc != ''": a parseable URL with a host counts, and so does a
// protocol-relative "//host/path" (which the url crate alone can't parse).
fn is_absolute(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => url.starts_with("//"),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why split('#') instead of Url::parse() to strip fragments?
//    - At this point the href may be relative, and Url::parse() fails on
//      relative references without a base
//    - Splitting on '#' works on any string
//
// 2. What does ends_with() have to do with "the last four characters"?
//    - For a four-character suffix like ".edu", ends_with(".edu") is exactly
//      "the last four characters equal .edu"
//    - Strings shorter than four characters can't match either way
//
// 3. Why Option instead of Result?
//    - A mailto: link is not an error, it's just not our kind of link
//    - None means "drop this silently", which is what the crawl loop does
// -----------------------------------------------------------------------------
