//! Built-in ingredient vocabulary.
//!
//! The catalog drives typeahead suggestions and the default pantry. It is
//! kept in line with the upstream vocabulary by [`validate_vocabulary`],
//! which the `pantry-validate` tool runs against TheMealDB's ingredient
//! list.

use serde::Serialize;

use crate::types::IngredientList;

/// Maximum number of suggestions returned by [`suggestions`].
pub const MAX_SUGGESTIONS: usize = 5;

/// A named group of catalog ingredients.
#[derive(Debug, Clone, Copy)]
pub struct IngredientGroup {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
}

/// Catalog groups, in display order.
pub static INGREDIENT_GROUPS: &[IngredientGroup] = &[
    IngredientGroup {
        name: "Proteins",
        ingredients: &[
            "Chicken",
            "Beef",
            "Pork",
            "Salmon",
            "Tuna",
            "Eggs",
            "Tofu",
            "Ground Beef",
            "Turkey Mince",
            "Bacon",
        ],
    },
    IngredientGroup {
        name: "Vegetables",
        ingredients: &[
            "Onion",
            "Garlic",
            "Tomatoes",
            "Potatoes",
            "Carrots",
            "Pepper",
            "Broccoli",
            "Spinach",
            "Mushrooms",
            "Celery",
            "Lettuce",
            "Cucumber",
            "Zucchini",
            "Sweet Potatoes",
            "Green Beans",
        ],
    },
    IngredientGroup {
        name: "Pantry Staples",
        ingredients: &[
            "Salt",
            "Black Pepper",
            "Olive Oil",
            "Vegetable Oil",
            "Flour",
            "Sugar",
            "Rice",
            "Pasta",
            "Bread",
            "Soy Sauce",
            "Vinegar",
            "Tomato Sauce",
            "Chicken Stock",
            "Onion",
            "Water",
        ],
    },
    IngredientGroup {
        name: "Dairy",
        ingredients: &[
            "Milk",
            "Butter",
            "Cheese",
            "Heavy Cream",
            "Yogurt",
            "Sour Cream",
            "Parmesan Cheese",
            "Cheddar Cheese",
        ],
    },
    IngredientGroup {
        name: "Herbs & Spices",
        ingredients: &[
            "Basil",
            "Oregano",
            "Thyme",
            "Rosemary",
            "Cumin",
            "Paprika",
            "Cinnamon",
            "Chili Powder",
            "Bay Leaves",
        ],
    },
];

/// Staples a new user starts with.
pub const DEFAULT_PANTRY_STAPLES: &[&str] = &[
    "Salt",
    "Black Pepper",
    "Olive Oil",
    "Vegetable Oil",
    "Flour",
    "Sugar",
    "Onion",
];

/// Every catalog ingredient, group by group.
///
/// A name listed in several groups appears once per group.
pub fn common_ingredients() -> impl Iterator<Item = &'static str> {
    INGREDIENT_GROUPS
        .iter()
        .flat_map(|group| group.ingredients.iter().copied())
}

/// Catalog names containing `input` (ignoring case) that are not already
/// in `existing`, capped at [`MAX_SUGGESTIONS`]. Blank input yields none.
pub fn suggestions(input: &str, existing: &IngredientList) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<&'static str> = Vec::new();
    for name in common_ingredients() {
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
        if name.to_lowercase().contains(&needle)
            && !existing.contains_name(name)
            && !out.contains(&name)
        {
            out.push(name);
        }
    }
    out
}

// ============================================================================
// Vocabulary validation
// ============================================================================

/// A local name spelled differently upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameMismatch {
    pub ours: String,
    pub theirs: Vec<String>,
}

/// Outcome of comparing the local catalog with the upstream vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Local names with no related upstream name at all.
    pub missing: Vec<String>,
    /// Local names absent upstream verbatim but related to upstream names.
    pub different: Vec<NameMismatch>,
}

impl ValidationReport {
    /// Whether every local name exists upstream verbatim.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.different.is_empty()
    }

    /// Process exit status for tooling: 0 when clean, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 2 }
    }
}

/// Compare local ingredient names against the upstream vocabulary.
///
/// An upstream name is related to a local one when either contains the
/// other, ignoring case. Local names with no related upstream name are
/// `missing`; names with related upstream names but no exact match are
/// `different`.
pub fn validate_vocabulary<'a>(
    ours: impl IntoIterator<Item = &'a str>,
    upstream: &[String],
) -> ValidationReport {
    let upstream_lower: Vec<String> = upstream.iter().map(|s| s.to_lowercase()).collect();
    let mut report = ValidationReport::default();

    for name in ours {
        let lower = name.to_lowercase();
        let theirs: Vec<String> = upstream
            .iter()
            .zip(&upstream_lower)
            .filter(|(_, up)| up.contains(&lower) || lower.contains(up.as_str()))
            .map(|(original, _)| original.clone())
            .collect();

        if theirs.is_empty() {
            report.missing.push(name.to_owned());
        } else if !upstream.iter().any(|up| up == name) {
            report.different.push(NameMismatch {
                ours: name.to_owned(),
                theirs,
            });
        }
    }
    report
}
