//! Recipe source trait and multi-ingredient search.
//!
//! [`RecipeSource`] is the seam between recipe retrieval and everything
//! downstream of it. [`MealDbClient`](crate::mealdb::MealDbClient) is the
//! production implementation; tests and embedders can supply their own.
//!
//! [`search_all`] fans out one search per ingredient, concurrently, and
//! merges the results into a single corpus deduplicated by recipe id.

use std::collections::HashSet;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::{info, warn};

use crate::telemetry;
use crate::types::Recipe;
use crate::Result;

/// Something that can find recipes for a single ingredient.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Source name for logs (e.g. "themealdb").
    fn name(&self) -> &str;

    /// Recipes using `ingredient`. No matches is an empty vec, not an error.
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>>;
}

/// Search every ingredient concurrently and merge the results.
///
/// Names are trimmed, blank names dropped and duplicates (ignoring case)
/// searched once. Recipes are deduplicated by id; the first occurrence in
/// ingredient order wins.
///
/// A failed search for one ingredient is logged and skipped. If every
/// search fails, the first error is returned so the caller can offer a
/// retry instead of showing a partial corpus.
pub async fn search_all<S, I, N>(source: &S, ingredients: I) -> Result<Vec<Recipe>>
where
    S: RecipeSource + ?Sized,
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let names = distinct_names(ingredients);
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let results = join_all(
        names
            .iter()
            .map(|name| source.search_by_ingredient(name)),
    )
    .await;

    let mut batches = Vec::with_capacity(results.len());
    let mut first_err = None;
    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(recipes) => batches.push(recipes),
            Err(e) => {
                metrics::counter!(telemetry::INGREDIENT_SEARCH_FAILURES_TOTAL).increment(1);
                warn!(source = source.name(), ingredient = %name, error = %e, "ingredient search failed");
                first_err.get_or_insert(e);
            }
        }
    }

    if batches.is_empty()
        && let Some(e) = first_err
    {
        return Err(e);
    }

    let corpus = dedupe_by_id(batches.into_iter().flatten());
    info!(
        source = source.name(),
        ingredients = names.len(),
        recipes = corpus.len(),
        "recipe search complete"
    );
    Ok(corpus)
}

/// Keep the first recipe seen for each id, preserving order.
pub fn dedupe_by_id(recipes: impl IntoIterator<Item = Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id.clone()))
        .collect()
}

fn distinct_names<I, N>(ingredients: I) -> Vec<String>
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .map(|n| n.as_ref().trim().to_owned())
        .filter(|n| !n.is_empty() && seen.insert(n.to_lowercase()))
        .collect()
}
