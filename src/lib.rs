//! Pantry - find recipes you can cook with what you have
//!
//! This crate searches TheMealDB for recipes using the ingredients a user
//! has on hand and ranks them by how much of each recipe is covered.
//! Upstream access is cached, rate limited and retried; matching and
//! ranking are pure functions over the fetched corpus.
//!
//! # Example
//!
//! ```rust,no_run
//! use pantry::{FetchClient, FetchConfig, IngredientMatcher, MealDbClient, RecipeFilter, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> pantry::Result<()> {
//!     let client = MealDbClient::new(FetchClient::new(FetchConfig::default())?);
//!     let have = ["Chicken", "Garlic", "Rice"];
//!
//!     let corpus = client.search_all(have).await?;
//!     let ranked = pantry::rank(
//!         &corpus,
//!         &have,
//!         &IngredientMatcher::default(),
//!         &RecipeFilter::new(),
//!         SortOrder::Completion,
//!     );
//!
//!     for r in ranked {
//!         println!("{:3}%  {}  (missing: {})", r.completion, r.recipe.title, r.missing.join(", "));
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod matching;
pub mod mealdb;
pub mod ranking;
pub mod source;
pub mod store;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PantryError, Result};
pub use fetch::{FetchClient, FetchConfig, LimiterPermit, RequestLimiter};
pub use matching::{EquivalenceRule, IngredientMatcher, ingredient_matches};
pub use mealdb::MealDbClient;
pub use ranking::{RankedRecipe, RecipeFilter, SortOrder, rank};
pub use source::{RecipeSource, search_all};
pub use store::{Favorites, SavedState, StateStore};
pub use types::{
    Category, Ingredient, IngredientList, IngredientOrigin, PantryStaples, Recipe,
    merge_with_pantry,
};
