// src/crawl/filter.rs
// =============================================================================
// This module extracts crawlable links from a captured page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the page they appeared on
// - Compare hostnames for the same-domain restriction
//
// Filter rules (deliberately strict):
// - hostname must EQUAL the crawl domain; "www.example.com" and
//   "example.com" count as different hosts, no normalization
// - only http/https schemes
// - paths ending in a known binary-asset extension are skipped
// - anything that fails to parse is silently dropped, not an error
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Path suffixes we never fetch: binary assets that would only waste a
// browser tab and cannot be bound into the PDF as pages
const ASSET_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".pdf", ".zip"];

// Extracts all crawlable same-domain links from a captured page
//
// Parameters:
//   html: the rendered HTML of the page
//   page_url: the URL the page was fetched from (for resolving relative hrefs)
//   domain: the hostname the crawl is restricted to
//
// Returns: absolute URLs, in document order, that pass the link filter
pub fn extract_links(html: &str, page_url: &str, domain: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the base URL once; without it relative hrefs mean nothing
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => return links,
    };

    let document = Html::parse_document(html);

    // "a[href]" is a constant selector, known valid, so unwrap is fine here
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // join() handles both absolute and relative hrefs;
            // malformed ones are dropped silently
            if let Ok(resolved) = base.join(href) {
                if is_valid_url(&resolved, domain) {
                    links.push(resolved.to_string());
                }
            }
        }
    }

    links
}

// The link filter: same host, web scheme, not a binary asset
pub fn is_valid_url(url: &Url, domain: &str) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    // Exact hostname match only; subdomains are a different site to us
    if url.host_str() != Some(domain) {
        return false;
    }

    let path = url.path().to_ascii_lowercase();
    if ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return false;
    }

    true
}
