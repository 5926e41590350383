//! Public types for the Pantry API.

mod category;
mod ingredient;
mod recipe;

pub use category::Category;
pub use ingredient::{
    Ingredient, IngredientList, IngredientOrigin, PantryStaples, merge_with_pantry,
};
pub use recipe::Recipe;
