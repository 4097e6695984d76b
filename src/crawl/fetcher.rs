// src/crawl/fetcher.rs
// =============================================================================
// The seam between the crawl loop and the rendering engine.
//
// The crawl loop only needs one operation from the outside world: "give me
// the rendered HTML and title of this URL". Expressing that as a trait
// keeps the frontier/visited logic testable with an in-memory fake, while
// the real implementation (src/browser.rs) drives headless Chrome.
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;

// What a single successful fetch produces
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Full rendered HTML, after the page settled
    pub html: String,

    /// Document title (empty string if the page has none)
    pub title: String,
}

// Fetches one page at a time on behalf of the crawl loop
#[async_trait]
pub trait PageFetcher {
    /// Renders `url` and returns its HTML and title
    ///
    /// Errors are page-level: the crawl loop logs them and moves on
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}
