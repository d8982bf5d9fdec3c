use super::run_bounded;
use crate::error::ScrapeError;
use crate::extractors::{Extractor, ParsingContext, RecipeExtractor};
use crate::fetchers::Fetcher;
use crate::model::RecipeRecord;
use log::{info, warn};
use std::sync::Arc;

/// Fetches and extracts one recipe page, reporting why it failed.
pub async fn fetch_recipe(
    fetcher: &dyn Fetcher,
    extractor: &RecipeExtractor,
    url: &str,
) -> Result<RecipeRecord, ScrapeError> {
    let markup = fetcher.fetch(url).await?;
    let context = ParsingContext::new(url, &markup);
    Ok(extractor.parse(&context)?)
}

/// Like [`fetch_recipe`], but failures are logged and become `None`.
pub async fn scrape_recipe(
    fetcher: &dyn Fetcher,
    extractor: &RecipeExtractor,
    url: &str,
) -> Option<RecipeRecord> {
    info!("Obtaining details from URL {}", url);
    match fetch_recipe(fetcher, extractor, url).await {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Skipping recipe at {}: {}", url, e);
            None
        }
    }
}

/// Scrapes every URL and returns the records that could be extracted, in the
/// order of `urls`.
pub async fn collect_recipe_details(
    fetcher: Arc<dyn Fetcher>,
    extractor: RecipeExtractor,
    urls: Vec<String>,
    max_concurrency: usize,
) -> Vec<RecipeRecord> {
    let requested = urls.len();

    let records: Vec<RecipeRecord> = run_bounded(urls, max_concurrency, |url| {
        let fetcher = Arc::clone(&fetcher);
        let extractor = extractor.clone();
        async move { scrape_recipe(fetcher.as_ref(), &extractor, &url).await }
    })
    .await
    .into_iter()
    .flatten()
    .collect();

    info!("Extracted {} of {} recipes", records.len(), requested);
    records
}
