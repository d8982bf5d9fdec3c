use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{PageRange, ScraperConfig};
use crate::disambiguator::Strategy;
use crate::extractors::{ListingExtractor, RecipeExtractor};
use crate::fetchers::{Fetcher, RateLimitedFetcher, RequestFetcher};
use crate::model::RecipeRecord;
use crate::pipelines::{details, listing};
use crate::ScrapeError;

/// Builder for configuring a [`Scraper`]
#[derive(Default)]
pub struct ScraperBuilder {
    config: ScraperConfig,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl ScraperBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the site root that listing pages are requested from
    ///
    /// # Example
    /// ```
    /// use goodfood_scrape::Scraper;
    ///
    /// let builder = Scraper::builder()
    ///     .base_url("https://www.bbcgoodfood.com");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the User-Agent sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use goodfood_scrape::Scraper;
    /// use std::time::Duration;
    ///
    /// let builder = Scraper::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set how many pages may be fetched at once
    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the request rate shared by all workers
    pub fn requests_per_second(mut self, requests_per_second: u32) -> Self {
        self.config.requests_per_second = requests_per_second;
        self
    }

    /// Choose how raw ingredient names are inferred
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.disambiguation = strategy;
        self
    }

    /// Use a custom fetcher instead of the HTTP client built from the config
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the scraper
    ///
    /// # Errors
    /// Returns `ScrapeError::BuilderError` if the base URL is invalid, the
    /// concurrency limit is zero or the HTTP client cannot be created.
    pub fn build(self) -> Result<Scraper, ScrapeError> {
        if self.config.max_concurrency == 0 {
            return Err(ScrapeError::BuilderError(
                "max_concurrency must be at least 1".to_string(),
            ));
        }

        let listing = ListingExtractor::new(&self.config.base_url).map_err(|e| {
            ScrapeError::BuilderError(format!("Invalid base URL '{}': {}", self.config.base_url, e))
        })?;

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => {
                let request = RequestFetcher::new(&self.config.request_config())?;
                Arc::new(RateLimitedFetcher::new(
                    request,
                    self.config.requests_per_second,
                )) as Arc<dyn Fetcher>
            }
        };

        Ok(Scraper {
            fetcher,
            listing: Arc::new(listing),
            recipes: RecipeExtractor::new(self.config.disambiguation),
            config: self.config,
        })
    }
}

/// Listing sweeps and recipe extraction against one site
pub struct Scraper {
    config: ScraperConfig,
    fetcher: Arc<dyn Fetcher>,
    listing: Arc<ListingExtractor>,
    recipes: RecipeExtractor,
}

impl Scraper {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use goodfood_scrape::Scraper;
    ///
    /// let scraper = Scraper::builder().build();
    /// assert!(scraper.is_ok());
    /// ```
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::default()
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// De-duplicated recipe URLs found on every listing page in `range`
    pub async fn collect_recipe_urls(&self, range: PageRange) -> HashSet<String> {
        listing::collect_recipe_urls(
            Arc::clone(&self.fetcher),
            Arc::clone(&self.listing),
            &self.config.base_url,
            range,
            self.config.max_concurrency,
        )
        .await
    }

    /// Fetch and extract one recipe, reporting why it failed
    pub async fn fetch_recipe(&self, url: &str) -> Result<RecipeRecord, ScrapeError> {
        details::fetch_recipe(self.fetcher.as_ref(), &self.recipes, url).await
    }

    /// Fetch and extract one recipe; failures are logged and become `None`
    pub async fn scrape_recipe(&self, url: &str) -> Option<RecipeRecord> {
        details::scrape_recipe(self.fetcher.as_ref(), &self.recipes, url).await
    }

    /// Records for every URL that could be extracted, in input order
    pub async fn collect_recipe_details<I>(&self, urls: I) -> Vec<RecipeRecord>
    where
        I: IntoIterator<Item = String>,
    {
        details::collect_recipe_details(
            Arc::clone(&self.fetcher),
            self.recipes.clone(),
            urls.into_iter().collect(),
            self.config.max_concurrency,
        )
        .await
    }
}
