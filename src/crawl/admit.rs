// src/crawl/admit.rs
// =============================================================================
// This module decides whether a normalized URL is eligible for the crawl
// frontier. It is a pure predicate - no side effects, no state.
//
// The checks run in order and short-circuit on the first failure:
// 1. Domain containment - exact match or subdomain of the limiting domain
// 2. Ignore terms - user-supplied substrings that disqualify a URL
// 3. Path prefix - restricts the crawl to a section of the site
// 4. Scheme - http/https only
// 5. Extension - directory-style or .html pages only (assets are not pages)
//
// Note that .pdf URLs fail check 5 here: the crawl loop routes them to the
// PDF sink *before* admission, so rejecting them only keeps them out of the
// frontier, it does not lose them.
// =============================================================================

use url::Url;

// Decides whether a URL may enter the crawl frontier.
//
// Parameters:
//   url: absolute, normalized URL
//   domain: limiting domain (e.g., "example.com")
//   path_prefix: required substring of the URL path ("" admits all paths)
//   ignore_terms: substrings that disqualify a URL anywhere they appear
//
// Returns: true only if every check passes
//
// Examples:
//   is_admissible("http://cs.example.com/a", "example.com", "", &[]) -> true
//   is_admissible("http://other.com/a", "example.com", "", &[]) -> false
//   is_admissible("http://example.com/logo.jpg", "example.com", "", &[]) -> false
pub fn is_admissible(url: &str, domain: &str, path_prefix: &str, ignore_terms: &[String]) -> bool {
    // A URL we can't parse is a URL we can't vouch for
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    // 1. Domain containment: the host must be the limiting domain itself or
    //    end with "." + domain (any depth of subdomain)
    let host = parsed.host_str().unwrap_or("");
    let subdomain_suffix = format!(".{}", domain);
    if host != domain && !host.ends_with(&subdomain_suffix) {
        return false;
    }

    // 2. Ignore terms match anywhere in the full URL
    if ignore_terms.iter().any(|term| url.contains(term.as_str())) {
        return false;
    }

    // 3. Path prefix: an empty prefix is a substring of every path
    if !parsed.path().contains(path_prefix) {
        return false;
    }

    // 4. Only web pages are fetchable
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    // 5. Only directory-style URLs or explicit HTML pages
    let ext = path_extension(parsed.path());
    ext.is_empty() || ext == ".html"
}

// Extension of the last path segment, splitext-style: the extension starts
// at the last '.' of the segment, and leading dots are part of the name, not
// an extension (".hidden" has none).
fn path_extension(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or("");
    let name = segment.trim_start_matches('.');
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admissible(url: &str) -> bool {
        is_admissible(url, "example.com", "", &[])
    }

    #[test]
    fn test_exact_domain_is_admitted() {
        assert!(admissible("http://example.com/pa/pa1"));
    }

    #[test]
    fn test_subdomain_is_admitted() {
        assert!(admissible("http://docs.example.com/pa/pa1"));
    }

    #[test]
    fn test_outside_domain_is_rejected() {
        assert!(!admissible("http://other.com/pa/pa1"));
    }

    #[test]
    fn test_lookalike_domain_is_rejected() {
        // "notexample.com" contains "example.com" but is a different site
        assert!(!admissible("http://notexample.com/pa/pa1"));
    }

    #[test]
    fn test_ignore_term_rejects() {
        let terms = vec!["calendar".to_string()];
        assert!(!is_admissible(
            "http://example.com/calendar/2024",
            "example.com",
            "",
            &terms
        ));
        assert!(is_admissible(
            "http://example.com/news/2024",
            "example.com",
            "",
            &terms
        ));
    }

    #[test]
    fn test_path_prefix_rejects_other_sections() {
        assert!(is_admissible(
            "http://example.com/depts/finance",
            "example.com",
            "/depts",
            &[]
        ));
        assert!(!is_admissible(
            "http://example.com/news/today",
            "example.com",
            "/depts",
            &[]
        ));
    }

    #[test]
    fn test_empty_path_prefix_admits_all_paths() {
        assert!(is_admissible("http://example.com/anything", "example.com", "", &[]));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        assert!(!admissible("ftp://example.com/file"));
    }

    #[test]
    fn test_https_is_admitted() {
        assert!(admissible("https://example.com/page"));
    }

    #[test]
    fn test_html_extension_is_admitted() {
        assert!(admissible("http://example.com/page.html"));
    }

    #[test]
    fn test_asset_extensions_are_rejected() {
        assert!(!admissible("http://example.com/report.pdf"));
        assert!(!admissible("http://example.com/logo.jpg"));
    }

    #[test]
    fn test_unparseable_url_is_rejected() {
        assert!(!admissible("not a url"));
    }

    #[test]
    fn test_path_extension_helper() {
        assert_eq!(path_extension("/a/b.html"), ".html");
        assert_eq!(path_extension("/a/b.tar.gz"), ".gz");
        assert_eq!(path_extension("/a/b"), "");
        assert_eq!(path_extension("/a/"), "");
        assert_eq!(path_extension("/a/.hidden"), "");
    }
}
