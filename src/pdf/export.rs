// src/pdf/export.rs
// =============================================================================
// Prints the combined document to a PDF file through headless Chrome.
//
// Steps:
// 1. Launch a fresh engine for this phase
// 2. Open a blank tab and set the combined document as its content
// 3. Wait for the document to finish loading (bounded by a generous
//    timeout), then a short settling pause so late layout work and
//    asynchronously loaded assets can finish
// 4. Print to PDF: A4 paper, 20px margins, background graphics on
//
// Any failure here is fatal and propagates to the caller; the engine is
// closed before returning either way.
// =============================================================================

use anyhow::{bail, Context, Result};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::page::Page;
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::browser::Engine;
use crate::crawl::PageRecord;

use super::document::combine_pages;

// Big sites produce big combined documents; allow plenty of load time
const LOAD_TIMEOUT: Duration = Duration::from_secs(120);

// Pause after load so async layout/rendering can finish before printing
const SETTLE_DELAY: Duration = Duration::from_millis(1500);

// How often we re-check document.readyState while waiting for the load
const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

// A4 paper, in inches (what printToPDF expects)
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

// 20px margins on all sides, converted at CSS 96 dpi
const MARGIN_IN: f64 = 20.0 / 96.0;

// Renders the captured pages into a single PDF at `output`
//
// This is the whole assembler phase: it owns its engine instance and
// releases it on both success and failure paths.
pub async fn render(pages: &[PageRecord], output: &Path) -> Result<()> {
    let engine = Engine::launch()
        .await
        .context("Failed to launch the PDF rendering engine")?;

    let result = export(&engine, pages, output).await;
    engine.close().await;
    result
}

async fn export(engine: &Engine, pages: &[PageRecord], output: &Path) -> Result<()> {
    let doc = combine_pages(pages);

    let page = engine.open("about:blank").await?;

    page.set_content(doc)
        .await
        .context("Failed to load the combined document")?;

    wait_until_loaded(&page).await?;
    sleep(SETTLE_DELAY).await;

    page.save_pdf(pdf_params(), output)
        .await
        .with_context(|| format!("Failed to export PDF to {}", output.display()))?;

    let _ = page.close().await;
    Ok(())
}

// Polls document.readyState until the combined document reports itself
// fully loaded, bounded by LOAD_TIMEOUT
async fn wait_until_loaded(page: &Page) -> Result<()> {
    let deadline = Instant::now() + LOAD_TIMEOUT;

    loop {
        let state: String = page
            .evaluate("document.readyState")
            .await
            .context("Failed to query document readiness")?
            .into_value()
            .context("Unexpected readyState value")?;

        if state == "complete" {
            return Ok(());
        }

        if Instant::now() >= deadline {
            bail!(
                "Combined document did not finish loading within {}s",
                LOAD_TIMEOUT.as_secs()
            );
        }

        sleep(READY_POLL_INTERVAL).await;
    }
}

// Fixed print layout: A4, 20px margins, keep background graphics
fn pdf_params() -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }
}
