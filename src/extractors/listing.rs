use super::{Extractor, ParsingContext};
use crate::document::Query;
use crate::error::ExtractError;
use log::{debug, warn};
use std::collections::HashSet;
use url::Url;

const RESULTS_CONTAINER: &str = "div.layout-md-rail__primary";
const RESULT_CARD_LINK: &str = "a.link.d-block";

/// Collects recipe links from a search results page.
pub struct ListingExtractor {
    base_url: Url,
}

impl ListingExtractor {
    pub fn new(base_url: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    /// Links found in `markup`, or an empty set when the page does not look like
    /// a results page.
    pub fn extract(&self, markup: &str, page_url: &str) -> HashSet<String> {
        let context = ParsingContext::new(page_url, markup);
        match self.parse(&context) {
            Ok(links) => links,
            Err(e) => {
                warn!("No recipe links extracted from {}: {}", page_url, e);
                HashSet::new()
            }
        }
    }
}

impl Extractor for ListingExtractor {
    type Output = HashSet<String>;

    fn parse(&self, context: &ParsingContext) -> Result<HashSet<String>, ExtractError> {
        let container = context
            .document
            .find_first(RESULTS_CONTAINER)
            .ok_or(ExtractError::MissingSection("results container"))?;

        let anchors = container.find_all(RESULT_CARD_LINK);
        if anchors.is_empty() {
            return Err(ExtractError::MissingSection("result cards"));
        }

        let mut links = HashSet::new();
        for anchor in anchors {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            match self.base_url.join(href) {
                Ok(link) => {
                    links.insert(link.to_string());
                }
                Err(e) => debug!("Skipping unresolvable link '{}': {}", href, e),
            }
        }

        debug!("Found {} recipe links on {}", links.len(), context.url);
        Ok(links)
    }
}
