//! Recipe category filter values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PantryError;

/// Categories offered as recipe filters.
///
/// Matching against [`Recipe::category`](crate::Recipe::category) is exact
/// string equality with [`Category::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Beef,
    Chicken,
    Dessert,
    Lamb,
    Pasta,
    Seafood,
    Vegetarian,
}

impl Category {
    /// Every filterable category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Beef,
        Category::Chicken,
        Category::Dessert,
        Category::Lamb,
        Category::Pasta,
        Category::Seafood,
        Category::Vegetarian,
    ];

    /// Upstream spelling of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beef => "Beef",
            Category::Chicken => "Chicken",
            Category::Dessert => "Dessert",
            Category::Lamb => "Lamb",
            Category::Pasta => "Pasta",
            Category::Seafood => "Seafood",
            Category::Vegetarian => "Vegetarian",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PantryError::UnknownCategory(s.to_owned()))
    }
}
