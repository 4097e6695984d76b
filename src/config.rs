// src/config.rs
// =============================================================================
// Run configuration.
//
// Two layers:
// - Config: one whole run (seed URLs, output PDF path, shared crawl knobs).
//   Loaded from a JSON file for `sitebook batch`, or built from CLI flags
//   for `sitebook site`.
// - CrawlTarget: the immutable per-seed slice of that config handed to the
//   crawler. One target per seed URL.
//
// A batch run produces ONE merged PDF, so the output path lives on Config
// rather than on each target.
// =============================================================================

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Default courtesy delay between page fetches
const DEFAULT_DELAY_MS: u64 = 1000;

// Configuration for one whole run
//
// #[derive(Deserialize)] lets serde_json fill this in from the config file.
// serde defaults keep `delay_ms` and `max_pages` optional in the JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Seed URLs, crawled in order
    pub urls: Vec<String>,

    /// Path of the single PDF written for the run
    pub output: PathBuf,

    /// Delay between page fetches, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Cap on captured pages per seed (absent = unbounded)
    #[serde(default)]
    pub max_pages: Option<usize>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Config {
    // Loads and validates a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if config.urls.is_empty() {
            bail!("Config file {} lists no seed URLs", path.display());
        }

        Ok(config)
    }

    // Builds a config for a single-seed run from CLI flags
    pub fn single(url: &str, output: PathBuf, delay_ms: u64, max_pages: Option<usize>) -> Self {
        Self {
            urls: vec![url.to_string()],
            output,
            delay_ms,
            max_pages,
        }
    }

    // One CrawlTarget per seed URL, in config order
    pub fn targets(&self) -> Vec<CrawlTarget> {
        self.urls
            .iter()
            .map(|url| CrawlTarget {
                base_url: url.clone(),
                delay_between_requests: Duration::from_millis(self.delay_ms),
                max_pages: self.max_pages,
            })
            .collect()
    }
}

// Immutable configuration for one crawl run (one seed)
#[derive(Debug, Clone)]
pub struct CrawlTarget {
    /// Where the crawl starts; also defines the domain boundary
    pub base_url: String,

    /// Pause after each successful fetch
    pub delay_between_requests: Duration,

    /// Stop after this many captured pages (None = crawl until the
    /// frontier runs dry)
    pub max_pages: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "urls": ["https://example.com", "https://example.org"],
            "output": "out.pdf",
            "delay_ms": 250,
            "max_pages": 10
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.urls.len(), 2);
        assert_eq!(config.output, PathBuf::from("out.pdf"));
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.max_pages, Some(10));
    }

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let json = r#"{ "urls": ["https://example.com"], "output": "out.pdf" }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.delay_ms, 1000);
        assert_eq!(config.max_pages, None);
    }

    #[test]
    fn test_targets_share_run_settings() {
        let json = r#"{
            "urls": ["https://a.test", "https://b.test"],
            "output": "out.pdf",
            "delay_ms": 50,
            "max_pages": 3
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let targets = config.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].base_url, "https://a.test");
        assert_eq!(targets[1].base_url, "https://b.test");
        for target in &targets {
            assert_eq!(target.delay_between_requests, Duration::from_millis(50));
            assert_eq!(target.max_pages, Some(3));
        }
    }

    #[test]
    fn test_load_rejects_empty_url_list() {
        let dir = std::env::temp_dir();
        let path = dir.join("sitebook_empty_urls.json");
        std::fs::write(&path, r#"{ "urls": [], "output": "out.pdf" }"#).unwrap();
        let result = Config::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
