//! Recipe scoring, filtering and sorting.
//!
//! [`rank`] turns a recipe corpus and the user's ingredients into
//! [`RankedRecipe`]s: each recipe's ingredients split into those the user
//! has and those missing, plus a completion percentage. Filters run before
//! sorting; the corpus itself is never modified.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::IngredientMatcher;
use crate::types::{Category, Recipe};

/// Sort order for ranked results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest completion first; ties keep corpus order.
    #[default]
    Completion,
    /// Ascending by title, case-sensitive.
    Alphabetical,
}

/// Which recipes to keep.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Keep only recipes in this category.
    pub category: Option<Category>,
    /// Keep only recipes whose id is in this set.
    pub favorites: Option<HashSet<String>>,
}

impl RecipeFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only recipes in `category`.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Keep only the given favorite recipe ids.
    pub fn favorites_only<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.favorites = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `recipe` passes the filter.
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        if let Some(favorites) = &self.favorites
            && !favorites.contains(&recipe.id)
        {
            return false;
        }
        self.category
            .is_none_or(|category| recipe.category == category.as_str())
    }
}

/// A recipe scored against the user's ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    /// Recipe ingredients the user has, in recipe order.
    pub matching: Vec<&'a str>,
    /// Recipe ingredients the user lacks, in recipe order.
    pub missing: Vec<&'a str>,
    /// Rounded percentage of ingredients on hand; 0 for an empty list.
    pub completion: u8,
}

impl<'a> RankedRecipe<'a> {
    /// Score one recipe.
    pub fn score<S: AsRef<str>>(
        recipe: &'a Recipe,
        user_ingredients: &[S],
        matcher: &IngredientMatcher,
    ) -> Self {
        let (matching, missing): (Vec<&str>, Vec<&str>) = recipe
            .ingredients
            .iter()
            .map(String::as_str)
            .partition(|ing| matcher.any_matches(user_ingredients, ing));
        let completion = completion(matching.len(), recipe.ingredients.len());
        Self {
            recipe,
            matching,
            missing,
            completion,
        }
    }
}

/// `round(100 * matched / total)`, or 0 when `total` is 0.
pub fn completion(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (matched.min(total) as f64 / total as f64 * 100.0).round();
    pct as u8
}

/// Score, filter and sort a corpus.
pub fn rank<'a, S: AsRef<str>>(
    corpus: &'a [Recipe],
    user_ingredients: &[S],
    matcher: &IngredientMatcher,
    filter: &RecipeFilter,
    order: SortOrder,
) -> Vec<RankedRecipe<'a>> {
    let mut ranked: Vec<RankedRecipe<'a>> = corpus
        .iter()
        .filter(|recipe| filter.accepts(recipe))
        .map(|recipe| RankedRecipe::score(recipe, user_ingredients, matcher))
        .collect();

    // sort_by is stable, so ties keep corpus order
    match order {
        SortOrder::Completion => ranked.sort_by(|a, b| b.completion.cmp(&a.completion)),
        SortOrder::Alphabetical => ranked.sort_by(|a, b| a.recipe.title.cmp(&b.recipe.title)),
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, category: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(id, title)
            .with_category(category)
            .with_ingredients(ingredients.iter().copied())
    }

    #[test]
    fn scores_matching_and_missing() {
        let r = recipe("1", "Stew", "Beef", &["Onion", "Garlic", "Salt", "Beef"]);
        let ranked = RankedRecipe::score(&r, &["Onion", "Garlic"], &IngredientMatcher::default());

        assert_eq!(ranked.matching, vec!["Onion", "Garlic"]);
        assert_eq!(ranked.missing, vec!["Salt", "Beef"]);
        assert_eq!(ranked.completion, 50);
    }

    #[test]
    fn empty_recipe_scores_zero() {
        let r = recipe("1", "Air", "Dessert", &[]);
        let ranked = RankedRecipe::score(&r, &["Onion"], &IngredientMatcher::default());
        assert_eq!(ranked.completion, 0);
        assert!(ranked.matching.is_empty());
        assert!(ranked.missing.is_empty());
    }

    #[test]
    fn completion_rounds() {
        assert_eq!(completion(1, 3), 33);
        assert_eq!(completion(2, 3), 67);
        assert_eq!(completion(1, 8), 13);
        assert_eq!(completion(3, 3), 100);
        assert_eq!(completion(0, 0), 0);
    }

    #[test]
    fn filter_by_category_is_exact() {
        let r = recipe("1", "Stew", "Beef", &[]);
        assert!(RecipeFilter::new().category(Category::Beef).accepts(&r));
        assert!(!RecipeFilter::new().category(Category::Lamb).accepts(&r));

        let lower = recipe("2", "Stew", "beef", &[]);
        assert!(!RecipeFilter::new().category(Category::Beef).accepts(&lower));
    }

    #[test]
    fn filter_by_favorites() {
        let r = recipe("52772", "Teriyaki", "Chicken", &[]);
        assert!(RecipeFilter::new().favorites_only(["52772"]).accepts(&r));
        assert!(!RecipeFilter::new().favorites_only(["1"]).accepts(&r));
        assert!(!RecipeFilter::new().favorites_only(Vec::<String>::new()).accepts(&r));
    }
}
