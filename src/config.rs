use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::disambiguator::Strategy;
use crate::error::ScrapeError;

/// Scraper configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Site root; listing pages live at `{base_url}/search?page=N`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent header attached to every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum number of requests in flight
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Shared request rate across all workers
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    /// How raw ingredient names are inferred when the page does not link one
    #[serde(default)]
    pub disambiguation: Strategy,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_concurrency: default_max_concurrency(),
            requests_per_second: default_requests_per_second(),
            disambiguation: Strategy::default(),
        }
    }
}

/// Everything the fetcher needs to know about outgoing requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: Duration::from_millis(default_timeout_ms()),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with GOODFOOD__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: GOODFOOD__USER_AGENT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn request_config(&self) -> RequestConfig {
        RequestConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

/// An inclusive range of listing page numbers, both ends at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Result<Self, ScrapeError> {
        if start == 0 || end == 0 {
            return Err(ScrapeError::InvalidRange(format!(
                "page numbers must be greater than zero, got {start}..={end}"
            )));
        }
        if start > end {
            return Err(ScrapeError::InvalidRange(format!(
                "start page {start} is after end page {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.bbcgoodfood.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_concurrency() -> usize {
    1
}

fn default_requests_per_second() -> u32 {
    2
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with GOODFOOD__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: GOODFOOD__BASE_URL
        .add_source(
            Environment::with_prefix("GOODFOOD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
