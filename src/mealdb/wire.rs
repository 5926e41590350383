//! TheMealDB JSON payloads and their normalization into [`Recipe`].

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::types::Recipe;

/// Number of numbered ingredient slots in a detail payload.
pub const INGREDIENT_SLOTS: usize = 20;

/// `filter.php` response. `meals` is `null` when nothing matches.
#[derive(Debug, Deserialize)]
pub(crate) struct FilterResponse {
    pub meals: Option<Vec<MealSummary>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
}

/// `lookup.php` response.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    pub meals: Option<Vec<MealDetail>>,
}

/// Full recipe detail. Ingredient slots (`strIngredient1`..`strIngredient20`)
/// and every other field land in `extra`.
#[derive(Debug, Deserialize)]
pub(crate) struct MealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MealDetail {
    /// Non-blank ingredient slots, trimmed, in slot order.
    pub fn ingredients(&self) -> Vec<String> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| self.extra.get(&format!("strIngredient{slot}")))
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn into_recipe(self) -> Recipe {
        let ingredients = self.ingredients();
        Recipe {
            id: self.id,
            title: self.title,
            image_url: self.thumbnail.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            ingredients,
        }
    }
}

/// `categories.php` response.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// `list.php?i=list` response.
#[derive(Debug, Deserialize)]
pub(crate) struct IngredientListResponse {
    pub meals: Option<Vec<IngredientEntry>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IngredientEntry {
    #[serde(rename = "strIngredient")]
    pub name: String,
}
