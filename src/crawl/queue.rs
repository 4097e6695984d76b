// src/crawl/queue.rs
// =============================================================================
// This module implements the breadth-first crawl loop.
//
// How it works:
// 1. Start with the seed URL in a FIFO queue (the frontier)
// 2. Pop the front URL, skip it if already visited
// 3. Fetch the rendered page through the PageFetcher
// 4. Record the page, extract its same-domain links, queue the unseen ones
// 5. Repeat until the frontier is empty or the page cap is reached
//
// Politeness:
// - Sleeps between requests to avoid overwhelming servers
// - Only crawls the seed's own hostname
//
// Failure semantics:
// - A fetch failure is logged and the loop moves on; the URL is NOT marked
//   visited, so it gets another chance only if some later page links to it
//   again. No explicit retry policy.
// =============================================================================

use anyhow::{anyhow, Result};
use std::collections::{HashSet, VecDeque};
use url::Url;

use super::fetcher::PageFetcher;
use super::filter::extract_links;
use crate::config::CrawlTarget;

// One successfully captured page, in fetch order
//
// The ordered Vec<PageRecord> a crawl returns is the only thing handed to
// the PDF assembler.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub html: String,
}

// Crawls a website starting from the target's seed URL
//
// Parameters:
//   fetcher: renders pages for us (headless Chrome in production)
//   target: seed URL, request delay, and page cap for this run
//   visited: URLs already fetched; shared across the seeds of a batch run
//            so a page reachable from two seeds is only captured once
//
// Returns: captured pages in fetch order. Only the seed URL being
// unparseable (or hostless) is an error; per-page failures are logged
// and skipped.
pub async fn crawl<F: PageFetcher>(
    fetcher: &F,
    target: &CrawlTarget,
    visited: &mut HashSet<String>,
) -> Result<Vec<PageRecord>> {
    let seed = Url::parse(&target.base_url)
        .map_err(|e| anyhow!("Invalid seed URL '{}': {}", target.base_url, e))?;

    // The crawl never leaves this hostname
    let domain = seed
        .host_str()
        .ok_or_else(|| anyhow!("Seed URL has no hostname: {}", target.base_url))?
        .to_string();

    // FIFO frontier gives deterministic breadth-first order.
    // Duplicates may be queued; the visited check at pop time filters them.
    let mut frontier = VecDeque::new();
    frontier.push_back(seed.to_string());

    let mut pages = Vec::new();

    while let Some(current) = frontier.pop_front() {
        // Page cap applies to captured pages, not queued ones
        if let Some(cap) = target.max_pages {
            if pages.len() >= cap {
                break;
            }
        }

        // Skip if another path already got here
        if visited.contains(&current) {
            continue;
        }

        println!("  Crawling: {}", current);

        match fetcher.fetch(&current).await {
            Ok(fetched) => {
                // Queue this page's same-domain links before consuming it
                for link in extract_links(&fetched.html, &current, &domain) {
                    if !visited.contains(&link) {
                        frontier.push_back(link);
                    }
                }

                pages.push(PageRecord {
                    url: current.clone(),
                    title: fetched.title,
                    html: fetched.html,
                });
                visited.insert(current);

                // Polite crawling: pause between requests
                tokio::time::sleep(target.delay_between_requests).await;
            }
            Err(e) => {
                // Page-level failure: log and move on
                eprintln!("  Warning: Failed to fetch {}: {}", current, e);
            }
        }
    }

    Ok(pages)
}
