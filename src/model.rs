use serde::Serialize;
use std::collections::HashMap;

/// Nutrient token (as printed on the page, e.g. "kcal", "fat") to value.
pub type NutrientMap = HashMap<String, f64>;

/// One entry of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    /// The full line as displayed, quantity and unit included.
    pub measured: String,
    /// The base ingredient name, absent when it could not be worked out.
    pub raw: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub saturates: Option<f64>,
    pub carbs: Option<f64>,
    pub sugars: Option<f64>,
    pub fibre: Option<f64>,
    pub protein: Option<f64>,
    pub salt: Option<f64>,
}

impl Nutrition {
    /// Picks the eight tracked nutrients out of a page's nutrient table.
    /// Keys the page did not list stay `None`.
    pub fn from_map(nutrients: &NutrientMap) -> Self {
        let get = |key: &str| nutrients.get(key).copied();
        Self {
            calories: get("kcal"),
            fat: get("fat"),
            saturates: get("saturates"),
            carbs: get("carbs"),
            sugars: get("sugars"),
            fibre: get("fibre"),
            protein: get("protein"),
            salt: get("salt"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeRecord {
    pub title: String,
    pub image_link: String,
    pub ingredients: Vec<IngredientLine>,
    pub method: Vec<String>,
    pub author: Option<String>,
    /// Minutes, 0 when the page gives no prep time.
    pub prep_time: u32,
    /// Minutes, 0 when the page gives no cook time.
    pub cook_time: u32,
    pub difficulty: String,
    pub rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub nutrition: Nutrition,
}

impl RecipeRecord {
    /// Raw ingredient names, positionally aligned with [`Self::measured_ingredients`].
    pub fn raw_ingredients(&self) -> Vec<Option<&str>> {
        self.ingredients
            .iter()
            .map(|line| line.raw.as_deref())
            .collect()
    }

    pub fn measured_ingredients(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .map(|line| line.measured.as_str())
            .collect()
    }
}
