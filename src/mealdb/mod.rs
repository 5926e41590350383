//! TheMealDB client.
//!
//! Read-only client for <https://www.themealdb.com/api.php>. All requests go
//! through a shared [`FetchClient`], so they are cached, rate limited and
//! retried the same way.
//!
//! Ingredient search is two-phase: `filter.php?i=<ingredient>` returns
//! summaries only, so the first [`DEFAULT_MAX_CANDIDATES`] are looked up one
//! at a time with `lookup.php?i=<id>`. Running the lookups sequentially
//! keeps a single search from monopolising the limiter. A candidate whose
//! lookup fails is logged and skipped; the rest of the batch continues.

mod wire;

pub use wire::INGREDIENT_SLOTS;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::{self, ValidationReport};
use crate::fetch::FetchClient;
use crate::source::{self, RecipeSource};
use crate::telemetry;
use crate::types::Recipe;
use crate::{PantryError, Result};

use wire::{CategoriesResponse, FilterResponse, IngredientListResponse, LookupResponse};

/// Default base URL for TheMealDB's free API tier.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Candidates looked up in detail per ingredient search.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Client for TheMealDB.
#[derive(Clone)]
pub struct MealDbClient {
    fetch: FetchClient,
    base_url: String,
    max_candidates: usize,
}

impl MealDbClient {
    /// Create a client against the public API.
    pub fn new(fetch: FetchClient) -> Self {
        Self::with_base_url(fetch, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(fetch: FetchClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            fetch,
            base_url,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Set how many search candidates are looked up in detail.
    pub fn max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = n;
        self
    }

    /// The underlying fetch client.
    pub fn fetch_client(&self) -> &FetchClient {
        &self.fetch
    }

    /// Recipes that use `ingredient`, up to the candidate limit.
    ///
    /// An ingredient with no upstream matches yields an empty vec. Failing
    /// detail lookups are skipped; a failing search request is returned as
    /// an error.
    pub async fn search_recipes_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(PantryError::InvalidInput("ingredient name is empty".into()));
        }

        let url = self.url("filter.php", &[("i", ingredient)])?;
        let response: FilterResponse = self.get_json(&url).await?;
        let Some(summaries) = response.meals else {
            debug!(ingredient, "no upstream recipes for ingredient");
            return Ok(Vec::new());
        };

        let mut recipes = Vec::with_capacity(self.max_candidates.min(summaries.len()));
        for summary in summaries.into_iter().take(self.max_candidates) {
            match self.recipe_details(&summary.id).await {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    metrics::counter!(telemetry::DETAIL_FETCH_FAILURES_TOTAL).increment(1);
                    warn!(ingredient, recipe_id = %summary.id, error = %e, "skipping recipe: detail fetch failed");
                }
            }
        }
        Ok(recipes)
    }

    /// Full detail for one recipe.
    pub async fn recipe_details(&self, id: &str) -> Result<Recipe> {
        let url = self.url("lookup.php", &[("i", id)])?;
        let response: LookupResponse = self.get_json(&url).await?;
        response
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(|detail| detail.into_recipe())
            .ok_or_else(|| PantryError::RecipeNotFound(id.to_owned()))
    }

    /// Search several ingredients concurrently and merge the results.
    ///
    /// See [`source::search_all`].
    pub async fn search_all<I, N>(&self, ingredients: I) -> Result<Vec<Recipe>>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        source::search_all(self, ingredients).await
    }

    /// Recipe category names known upstream.
    pub async fn fetch_categories(&self) -> Result<Vec<String>> {
        let url = self.url("categories.php", &[])?;
        let response: CategoriesResponse = self.get_json(&url).await?;
        Ok(response.categories.into_iter().map(|c| c.name).collect())
    }

    /// The full upstream ingredient vocabulary.
    pub async fn fetch_ingredient_vocabulary(&self) -> Result<Vec<String>> {
        let url = self.url("list.php", &[("i", "list")])?;
        let response: IngredientListResponse = self.get_json(&url).await?;
        Ok(response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    /// Compare the built-in catalog against the upstream vocabulary.
    pub async fn validate_catalog(&self) -> Result<ValidationReport> {
        let upstream = self.fetch_ingredient_vocabulary().await?;
        Ok(catalog::validate_vocabulary(
            catalog::common_ingredients(),
            &upstream,
        ))
    }

    fn url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let raw = format!("{}/{endpoint}", self.base_url);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        }
        .map_err(|e| PantryError::Configuration(format!("invalid upstream URL {raw}: {e}")))?;
        Ok(url.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.fetch.fetch_with_retry(url).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn name(&self) -> &str {
        "themealdb"
    }

    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>> {
        self.search_recipes_by_ingredient(ingredient).await
    }
}
