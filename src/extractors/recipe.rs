use super::{Extractor, ParsingContext};
use crate::disambiguator::{Disambiguator, Strategy};
use crate::document::{collapsed_text, full_text, own_text_nodes, stripped_text, Query};
use crate::error::ExtractError;
use crate::model::{IngredientLine, NutrientMap, Nutrition, RecipeRecord};
use crate::text::{find_first_number, time_string_to_minutes};
use log::{debug, warn};
use scraper::{ElementRef, Html};
use std::sync::Arc;

const TITLE: &str = "div.post-header__title";
const IMAGE_CONTAINER: &str = "div.image__container";
const IMAGE: &str = "img.image__img";
const INGREDIENTS: &str = "section.recipe__ingredients";
const INGREDIENT_LINK: &str = "a.link--styled";
const METHOD: &str = "section.recipe__method-steps";
const AUTHOR: &str = "div.author-link";
const TIMES: &str = ".post-header__cook-and-prep-time time";
const SKILL_LEVEL: &str = "div.post-header__skill-level";
const RATINGS: &str = "div.rating__values";
const RATING: &str = "span.sr-only";
const RATINGS_COUNT: &str = "span.rating__count-text";
const NUTRITION_TABLE: &str = "table.key-value-blocks";
const NUTRITION_ROW: &str = "tr.key-value-blocks__item";
const NUTRIENT_KEY: &str = "td.key-value-blocks__key";
const NUTRIENT_VALUE: &str = "td.key-value-blocks__value";

/// Turns a recipe detail page into a [`RecipeRecord`].
///
/// Title, ingredients and method are required; a page missing any of them is
/// rejected. Every other field falls back to a default (empty, zero or `None`).
#[derive(Clone)]
pub struct RecipeExtractor {
    disambiguator: Arc<dyn Disambiguator>,
}

impl RecipeExtractor {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            disambiguator: Arc::from(strategy.disambiguator()),
        }
    }

    pub fn with_disambiguator(disambiguator: Arc<dyn Disambiguator>) -> Self {
        Self { disambiguator }
    }

    /// Extracts a record from `markup`, or `None` when the page is missing a
    /// required section.
    pub fn extract(&self, markup: &str, url: &str) -> Option<RecipeRecord> {
        let context = ParsingContext::new(url, markup);
        match self.parse(&context) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding recipe at {}: {}", url, e);
                None
            }
        }
    }

    fn ingredient_line(&self, item: ElementRef) -> IngredientLine {
        let measured = full_text(&item);

        let linked = item
            .find_first(INGREDIENT_LINK)
            .map(|anchor| stripped_text(&anchor).replace(',', ""))
            .filter(|name| !name.is_empty());

        let raw = match linked {
            Some(name) => Some(name),
            None => {
                let fragments: Vec<String> = own_text_nodes(&item)
                    .into_iter()
                    .map(|text| text.replace(',', "").trim().to_string())
                    .filter(|text| !text.is_empty())
                    .collect();
                self.disambiguator.raw_ingredient(&measured, &fragments)
            }
        };

        if raw.is_none() {
            debug!("No raw ingredient found for '{}'", measured);
        }

        IngredientLine { measured, raw }
    }

    fn ingredients(&self, document: &Html) -> Result<Vec<IngredientLine>, ExtractError> {
        let section = document
            .find_first(INGREDIENTS)
            .ok_or(ExtractError::MissingRequired("ingredients"))?;

        let lines: Vec<IngredientLine> = section
            .find_all("li")
            .into_iter()
            .map(|item| self.ingredient_line(item))
            .collect();

        if lines.is_empty() {
            return Err(ExtractError::MissingRequired("ingredients"));
        }
        Ok(lines)
    }
}

fn title(document: &Html) -> Result<String, ExtractError> {
    document
        .find_first(TITLE)
        .map(|element| stripped_text(&element))
        .filter(|title| !title.is_empty())
        .ok_or(ExtractError::MissingRequired("title"))
}

fn method(document: &Html) -> Result<Vec<String>, ExtractError> {
    let section = document
        .find_first(METHOD)
        .ok_or(ExtractError::MissingRequired("method"))?;

    let steps: Vec<String> = section
        .find_all("p")
        .iter()
        .map(collapsed_text)
        .filter(|step| !step.is_empty())
        .collect();

    if steps.is_empty() {
        return Err(ExtractError::MissingRequired("method"));
    }
    Ok(steps)
}

fn image_link(document: &Html) -> String {
    document
        .find_first(IMAGE_CONTAINER)
        .and_then(|container| container.find_first(IMAGE))
        .and_then(|image| image.value().attr("src"))
        .map(str::to_string)
        .unwrap_or_default()
}

fn author(document: &Html) -> Option<String> {
    document
        .find_first(AUTHOR)
        .map(|element| stripped_text(&element))
        .filter(|author| !author.is_empty())
}

/// Prep and cook minutes from the first two duration elements, in page order.
fn times(document: &Html) -> (u32, u32) {
    let durations: Vec<u32> = document
        .find_all(TIMES)
        .iter()
        .take(2)
        .map(|element| time_string_to_minutes(&stripped_text(element)))
        .collect();

    let prep = durations.first().copied().unwrap_or(0);
    let cook = durations.get(1).copied().unwrap_or(0);
    (prep, cook)
}

fn difficulty(document: &Html) -> String {
    document
        .find_first(SKILL_LEVEL)
        .map(|element| stripped_text(&element))
        .unwrap_or_default()
}

fn ratings(document: &Html) -> (Option<f64>, Option<u32>) {
    let Some(container) = document.find_first(RATINGS) else {
        return (None, None);
    };

    let rating = container
        .find_first(RATING)
        .and_then(|element| find_first_number(&stripped_text(&element)));

    let count = container
        .find_first(RATINGS_COUNT)
        .and_then(|element| find_first_number(&stripped_text(&element)))
        .map(|count| count as u32);

    (rating, count)
}

/// Name/value pairs from the nutrition table. Rows without a key or a number are
/// skipped individually.
fn nutrients(document: &Html) -> NutrientMap {
    let mut nutrients = NutrientMap::new();

    let Some(table) = document.find_first(NUTRITION_TABLE) else {
        debug!("No nutrition table on page");
        return nutrients;
    };

    for row in table.find_all(NUTRITION_ROW) {
        let key = row
            .find_first(NUTRIENT_KEY)
            .map(|cell| stripped_text(&cell).to_lowercase())
            .filter(|key| !key.is_empty());
        let value = row
            .find_first(NUTRIENT_VALUE)
            .and_then(|cell| find_first_number(&stripped_text(&cell)));

        match (key, value) {
            (Some(key), Some(value)) => {
                nutrients.insert(key, value);
            }
            _ => debug!("Skipping unreadable nutrition row: {}", full_text(&row)),
        }
    }

    nutrients
}

impl Extractor for RecipeExtractor {
    type Output = RecipeRecord;

    fn parse(&self, context: &ParsingContext) -> Result<RecipeRecord, ExtractError> {
        debug!("Extracting recipe from {}", context.url);
        let document = &context.document;

        let title = title(document)?;
        let ingredients = self.ingredients(document)?;
        let method = method(document)?;

        let (prep_time, cook_time) = times(document);
        let (rating, ratings_count) = ratings(document);

        let record = RecipeRecord {
            title,
            image_link: image_link(document),
            ingredients,
            method,
            author: author(document),
            prep_time,
            cook_time,
            difficulty: difficulty(document),
            rating,
            ratings_count,
            nutrition: Nutrition::from_map(&nutrients(document)),
        };

        debug!("Recipe name: {}", record.title);
        debug!("Ingredients count: {}", record.ingredients.len());
        debug!("Method steps: {}", record.method.len());

        Ok(record)
    }
}
