// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build a run Config (from flags or from a JSON config file)
// 3. Phase 1: crawl every seed, collecting rendered pages in order
// 4. Phase 2: bind the collected pages into one PDF
// 5. Exit with proper code (0 = PDF written, 1 = fatal error)
//
// Each phase gets its own browser engine, released before the phase
// returns whether it succeeded or not.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod browser; // src/browser.rs - headless Chrome engine wrapper
mod cli; //     src/cli.rs - command-line parsing
mod config; //  src/config.rs - run configuration
mod crawl; //   src/crawl/ - frontier/visited crawl loop
mod pdf; //     src/pdf/ - combined document + PDF export

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;

use browser::Engine;
use cli::{Cli, Commands};
use config::Config;
use crawl::PageRecord;

// The #[tokio::main] attribute transforms our async main into a real main
// function: it creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Fatal, run-level failure: report and exit non-zero
            eprintln!("Error: {:#}", e); // {:#} prints the whole context chain
            1
        }
    };

    std::process::exit(exit_code);
}

// Dispatches the chosen subcommand to the shared pipeline
async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Site {
            website_url,
            output,
            delay_ms,
            max_pages,
        } => Config::single(&website_url, output, delay_ms, max_pages),
        Commands::Batch { config_path } => Config::load(&config_path)?,
    };

    run_pipeline(&config).await
}

// The two-phase pipeline: crawl all seeds, then assemble one PDF
async fn run_pipeline(config: &Config) -> Result<()> {
    let pages = crawl_all_seeds(config).await?;

    if pages.is_empty() {
        // Nothing captured (every fetch failed): an empty PDF would be
        // useless, treat this as a failed run
        bail!("No pages captured, nothing to render");
    }

    println!("📄 Captured {} page(s)", pages.len());
    assemble(&pages, &config.output).await?;

    println!("✅ Wrote {}", config.output.display());
    Ok(())
}

// Phase 1: one engine, one crawl per seed, one shared visited set
//
// The shared visited set deduplicates across seeds, so a page reachable
// from two seeds lands in the merged PDF once.
async fn crawl_all_seeds(config: &Config) -> Result<Vec<PageRecord>> {
    let engine = Engine::launch().await?;

    let mut visited = HashSet::new();
    let mut pages = Vec::new();
    let mut outcome = Ok(());

    for target in config.targets() {
        println!("🔍 Crawling site: {}", target.base_url);
        match crawl::crawl(&engine, &target, &mut visited).await {
            Ok(mut captured) => pages.append(&mut captured),
            Err(e) => {
                // A bad seed URL is a config problem, not a page-level
                // hiccup: stop the run, but still release the engine first
                outcome = Err(e);
                break;
            }
        }
    }

    engine.close().await;
    outcome?;

    Ok(pages)
}

// Phase 2: bind the captured pages into one PDF (own engine inside)
async fn assemble(pages: &[PageRecord], output: &Path) -> Result<()> {
    println!("🖨️  Rendering PDF...");
    pdf::render(pages, output).await
}
