// src/pdf/mod.rs
// =============================================================================
// This module turns the crawler's captured pages into a single PDF.
//
// Submodules:
// - document: builds the combined HTML document (pure string work,
//   unit-tested without a browser)
// - export: loads that document into headless Chrome and prints it to
//   an A4 PDF file
//
// Unlike the crawl phase, every failure here is fatal to the run: a half
// assembled PDF is worse than none.
// =============================================================================

mod document;
mod export;

// Re-export the public assembler API
pub use document::combine_pages;
pub use export::render;
