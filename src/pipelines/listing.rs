use super::run_bounded;
use crate::config::PageRange;
use crate::extractors::ListingExtractor;
use crate::fetchers::Fetcher;
use log::{info, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// URL of one search results page.
pub fn listing_page_url(base_url: &str, page: u32) -> String {
    format!("{}/search?page={}", base_url.trim_end_matches('/'), page)
}

/// Fetches every listing page in `range` and returns the de-duplicated set of
/// recipe links found across all of them.
///
/// Pages that fail to load or have no results contribute nothing; the sweep
/// always runs to the end of the range.
pub async fn collect_recipe_urls(
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<ListingExtractor>,
    base_url: &str,
    range: PageRange,
    max_concurrency: usize,
) -> HashSet<String> {
    let per_page = run_bounded(range.pages(), max_concurrency, |page| {
        let fetcher = Arc::clone(&fetcher);
        let extractor = Arc::clone(&extractor);
        let url = listing_page_url(base_url, page);

        async move {
            info!("At page {} scraping {}", page, url);
            match fetcher.fetch(&url).await {
                Ok(markup) => extractor.extract(&markup, &url),
                Err(e) => {
                    warn!("Failed to retrieve page {}: {}. Continuing to the next page", page, e);
                    HashSet::new()
                }
            }
        }
    })
    .await;

    let urls: HashSet<String> = per_page.into_iter().flatten().collect();
    info!(
        "Collected {} recipe URLs from pages {}..={}",
        urls.len(),
        range.start(),
        range.end()
    );
    urls
}
