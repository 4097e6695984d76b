// src/browser.rs
// =============================================================================
// This module wraps the headless Chrome instance we use as our rendering
// engine. Everything that talks the Chrome DevTools Protocol lives here;
// the rest of the program only sees the Engine type and the PageFetcher
// trait it implements.
//
// Lifecycle:
// - Engine::launch() starts a Chrome process and spawns a background task
//   that drains its CDP event stream (chromiumoxide requires the handler
//   to be polled or every command call stalls)
// - Engine::close() shuts the process down; it consumes the Engine, so the
//   engine can only be closed once per phase
//
// Each of the two phases (crawl, PDF export) launches its own engine and
// closes it before returning, on both success and failure paths.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::crawl::{FetchedPage, PageFetcher};

// Chrome can be slow to start on loaded machines; give it a full minute
const LAUNCH_TIMEOUT: Duration = Duration::from_secs(60);

// A running headless Chrome instance plus the task draining its events
pub struct Engine {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl Engine {
    // Launches a headless Chrome process
    //
    // Fatal on failure: without the engine neither phase can do anything,
    // so the caller is expected to propagate this error to the top level.
    pub async fn launch() -> Result<Self> {
        let config = BrowserConfig::builder()
            .build()
            .map_err(|e| anyhow!("Invalid browser configuration: {}", e))?;

        let (browser, mut handler) = tokio::time::timeout(LAUNCH_TIMEOUT, Browser::launch(config))
            .await
            .context("Timed out launching the browser")?
            .context("Failed to launch the browser")?;

        // The handler is a stream of CDP events that must be polled for the
        // browser connection to make progress. It ends when the browser exits.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    // Opens a new tab already navigating to `url`
    //
    // Use "about:blank" for a tab you intend to fill with set_content()
    pub async fn open(&self, url: &str) -> Result<Page> {
        self.browser
            .new_page(url)
            .await
            .with_context(|| format!("Failed to open page: {}", url))
    }

    // Shuts the browser down
    //
    // Consumes self so a phase cannot keep using (or re-close) the engine.
    // Best-effort: a browser that refuses to die cleanly only earns a
    // warning, since by this point the phase's real result already exists.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            eprintln!("Warning: Failed to close the browser cleanly: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}

// The crawler fetches pages through this trait so the crawl loop can be
// tested against an in-memory fake instead of a real Chrome process
#[async_trait]
impl PageFetcher for Engine {
    // Navigates a fresh tab to `url` and captures the rendered result
    //
    // Waits for the navigation to settle (Chrome's load signal) before
    // reading the DOM. Deliberately no timeout here: the crawl phase
    // accepts that an unresponsive page stalls the run.
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let page = self.open(url).await?;

        // Capture inside a block so the tab is closed no matter which
        // step failed
        let captured = capture(&page, url).await;
        let _ = page.close().await;

        captured
    }
}

// Waits for the page to settle, then grabs its HTML and title
async fn capture(page: &Page, url: &str) -> Result<FetchedPage> {
    page.wait_for_navigation()
        .await
        .with_context(|| format!("Navigation failed for {}", url))?;

    let html = page
        .content()
        .await
        .with_context(|| format!("Failed to read rendered HTML of {}", url))?;

    let title = page
        .get_title()
        .await
        .with_context(|| format!("Failed to read title of {}", url))?
        .unwrap_or_default();

    Ok(FetchedPage { html, title })
}
