pub mod builder;
pub mod config;
pub mod disambiguator;
pub mod document;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod table;
pub mod text;

use log::warn;
use std::collections::HashSet;

// Re-export builder API types
pub use builder::{Scraper, ScraperBuilder};
pub use config::{PageRange, ScraperConfig};
pub use disambiguator::Strategy;
pub use error::{ExtractError, FetchError, ScrapeError, TableError};
pub use model::{IngredientLine, Nutrition, RecipeRecord};

/// Collect recipe URLs from listing pages `start..=end` with the default configuration
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), goodfood_scrape::ScrapeError> {
/// let urls = goodfood_scrape::get_recipe_urls_from_pages(1, 2).await?;
/// println!("{} recipes", urls.len());
/// # Ok(())
/// # }
/// ```
pub async fn get_recipe_urls_from_pages(start: u32, end: u32) -> Result<HashSet<String>, ScrapeError> {
    let range = PageRange::new(start, end)?;
    let scraper = Scraper::builder().build()?;
    Ok(scraper.collect_recipe_urls(range).await)
}

/// Fetch and extract a single recipe page with the default configuration
pub async fn fetch_recipe(url: &str) -> Result<RecipeRecord, ScrapeError> {
    let scraper = Scraper::builder().build()?;
    scraper.fetch_recipe(url).await
}

/// Extract a recipe from markup that has already been fetched
///
/// Returns `None` when the page lacks a title, ingredients or method.
pub fn extract_recipe(markup: &str, url: &str, strategy: Strategy) -> Option<RecipeRecord> {
    extractors::RecipeExtractor::new(strategy).extract(markup, url)
}

/// Recipe links on one listing page, resolved against `base_url`
///
/// Returns an empty set when the page has no results container or cards.
pub fn extract_listing_links(markup: &str, base_url: &str) -> HashSet<String> {
    match extractors::ListingExtractor::new(base_url) {
        Ok(extractor) => extractor.extract(markup, base_url),
        Err(e) => {
            warn!("Invalid base URL '{}': {}", base_url, e);
            HashSet::new()
        }
    }
}
