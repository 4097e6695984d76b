// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL (explicit FIFO queue,
//   so traversal order is deterministic)
// - Respects same-domain restriction (doesn't crawl external sites)
// - Skips binary assets (images, archives, PDFs)
// - Configurable page cap and polite delay between requests
//
// Submodules:
// - fetcher: the PageFetcher trait the loop fetches pages through
// - filter: link extraction and the same-domain/asset filter
// - queue: the frontier/visited crawl loop itself
// =============================================================================

mod fetcher;
mod filter;
mod queue;

// Re-export the public crawling API
pub use fetcher::{FetchedPage, PageFetcher};
pub use filter::extract_links;
pub use queue::{crawl, PageRecord};
