use crate::error::ExtractError;
use scraper::Html;

mod listing;
mod recipe;

pub use listing::ListingExtractor;
pub use recipe::RecipeExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, markup: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(markup),
        }
    }
}

pub trait Extractor {
    type Output;

    fn parse(&self, context: &ParsingContext) -> Result<Self::Output, ExtractError>;
}
