// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two ways to run sitebook:
// - site: crawl one seed URL, flags for output/delay/page cap
// - batch: read seeds and output path from a JSON config file
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitebook",
    version = "0.1.0",
    about = "Crawl a website and bind the rendered pages into a single PDF",
    long_about = "sitebook walks a site starting from a seed URL, captures each page's \
                  rendered HTML with a headless Chrome instance, and concatenates the \
                  pages into one paginated PDF document."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (site, batch)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a single website and write one PDF
    ///
    /// Example: sitebook site https://example.com --output example.pdf
    Site {
        /// Seed URL to start crawling from (e.g., https://example.com)
        ///
        /// This is a positional argument (required, no flag needed)
        website_url: String,

        /// Path of the PDF file to write
        #[arg(long, short, default_value = "site.pdf")]
        output: PathBuf,

        /// Delay between page fetches, in milliseconds
        ///
        /// Courtesy rate limit so we do not hammer the origin server
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,

        /// Maximum number of pages to capture (default: unbounded)
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Crawl every seed listed in a JSON config file into one merged PDF
    ///
    /// Example: sitebook batch sites.json
    ///
    /// Config format:
    ///   { "urls": ["https://example.com"], "output": "site.pdf",
    ///     "delay_ms": 1000, "max_pages": 50 }
    Batch {
        /// Path to the JSON configuration file
        config_path: PathBuf,
    },
}
