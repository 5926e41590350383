//! Normalized recipe type.

use serde::{Deserialize, Serialize};

/// A recipe assembled from an upstream detail lookup.
///
/// Identity is [`id`](Self::id). Instances are rebuilt on every search
/// and are never mutated by matching, ranking or filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Upstream recipe identifier (e.g. "52772").
    pub id: String,
    /// Display title.
    pub title: String,
    /// Thumbnail image URL.
    pub image_url: String,
    /// Preparation instructions, one step per line.
    pub instructions: String,
    /// Upstream category (e.g. "Chicken", "Dessert").
    pub category: String,
    /// Ingredient names in upstream slot order.
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Create a recipe with the given id and title and no other data.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: String::new(),
            instructions: String::new(),
            category: String::new(),
            ingredients: Vec::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the ingredient list.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instructions text.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Instruction steps: the non-blank lines of `instructions`, trimmed.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
