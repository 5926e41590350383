//! Ingredient matching.
//!
//! Decides whether a user ingredient satisfies a recipe ingredient.
//! Comparison is case-insensitive and runs in two steps:
//!
//! 1. **Equivalence rules.** The first rule whose canonical terms contain
//!    the user ingredient is consulted; if its match set contains the
//!    recipe ingredient, they match.
//! 2. **Substring fallback.** Otherwise they match when either string
//!    contains the other.
//!
//! The fallback is permissive on purpose ("pepper" satisfies
//! "bell pepper"). There is no stemming or edit-distance matching.

/// Declares user-side terms equivalent to a set of recipe-side terms.
///
/// Terms are stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquivalenceRule {
    /// Canonical user-side terms.
    pub ingredients: &'static [&'static str],
    /// Recipe-side terms the canonical terms satisfy.
    pub matches: &'static [&'static str],
}

/// The built-in rule table.
pub static DEFAULT_RULES: &[EquivalenceRule] = &[
    EquivalenceRule {
        ingredients: &["vegetable oil", "olive oil"],
        matches: &["oil"],
    },
    EquivalenceRule {
        ingredients: &["chicken stock", "chicken broth"],
        matches: &["chicken stock", "stock"],
    },
    EquivalenceRule {
        ingredients: &["onion"],
        matches: &["onion", "onions", "white onion", "red onion"],
    },
    EquivalenceRule {
        ingredients: &["garlic"],
        matches: &["garlic", "garlic clove", "garlic cloves"],
    },
    EquivalenceRule {
        ingredients: &["tomatoes"],
        matches: &["tomato", "tomatoes", "chopped tomatoes"],
    },
    EquivalenceRule {
        ingredients: &["pepper"],
        matches: &["pepper", "bell pepper", "peppers", "red pepper", "green pepper"],
    },
];

/// Matches user ingredients against recipe ingredients.
#[derive(Debug, Clone, Copy)]
pub struct IngredientMatcher {
    rules: &'static [EquivalenceRule],
}

impl IngredientMatcher {
    /// Matcher using a custom rule table.
    pub const fn new(rules: &'static [EquivalenceRule]) -> Self {
        Self { rules }
    }

    /// The rule table in use.
    pub fn rules(&self) -> &'static [EquivalenceRule] {
        self.rules
    }

    /// Whether `user` satisfies `recipe`, ignoring case and surrounding
    /// whitespace. A blank term on either side never matches.
    pub fn matches(&self, user: &str, recipe: &str) -> bool {
        let user = user.trim().to_lowercase();
        let recipe = recipe.trim().to_lowercase();
        if user.is_empty() || recipe.is_empty() {
            return false;
        }

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.ingredients.contains(&user.as_str()));
        if rule.is_some_and(|rule| rule.matches.contains(&recipe.as_str())) {
            return true;
        }

        recipe.contains(&user) || user.contains(&recipe)
    }

    /// Whether any of `user_ingredients` satisfies `recipe`.
    pub fn any_matches<S: AsRef<str>>(&self, user_ingredients: &[S], recipe: &str) -> bool {
        user_ingredients
            .iter()
            .any(|user| self.matches(user.as_ref(), recipe))
    }
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

/// [`IngredientMatcher::matches`] with the built-in rules.
pub fn ingredient_matches(user: &str, recipe: &str) -> bool {
    IngredientMatcher::default().matches(user, recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_based_matches() {
        assert!(ingredient_matches("onion", "Red Onion"));
        assert!(ingredient_matches("pepper", "Bell Pepper"));
        assert!(ingredient_matches("Olive Oil", "Oil"));
        assert!(ingredient_matches("chicken broth", "Stock"));
    }

    #[test]
    fn substring_fallback() {
        assert!(ingredient_matches("flour", "self-rising flour"));
        assert!(ingredient_matches("Chicken Thighs", "chicken"));
    }

    #[test]
    fn unrelated_ingredients_do_not_match() {
        assert!(!ingredient_matches("salt", "pepper"));
        assert!(!ingredient_matches("beef", "lamb"));
    }

    #[test]
    fn rule_miss_falls_through_to_substring() {
        // "tomatoes" rule does not list "tomato puree", and neither string
        // contains the other.
        assert!(!ingredient_matches("tomatoes", "tomato puree"));
        assert!(ingredient_matches("tomatoes", "chopped tomatoes"));
    }

    #[test]
    fn custom_rules() {
        static RULES: &[EquivalenceRule] = &[EquivalenceRule {
            ingredients: &["scallion"],
            matches: &["spring onions"],
        }];
        let matcher = IngredientMatcher::new(RULES);
        assert!(matcher.matches("Scallion", "Spring Onions"));
        assert!(!IngredientMatcher::default().matches("Scallion", "Spring Onions"));
    }

    #[test]
    fn blank_terms_never_match() {
        assert!(!ingredient_matches("", "Beef"));
        assert!(!ingredient_matches("   ", "Salt"));
        assert!(!ingredient_matches("Beef", " "));
    }

    #[test]
    fn padded_terms_are_trimmed() {
        assert!(ingredient_matches(" onion ", "Red Onion"));
        assert!(ingredient_matches("\tgarlic", "Garlic Cloves "));
    }

    #[test]
    fn any_matches_over_user_set() {
        let matcher = IngredientMatcher::default();
        let user = ["Garlic", "Rice"];
        assert!(matcher.any_matches(&user, "Garlic Clove"));
        assert!(!matcher.any_matches(&user, "Beef"));
    }
}
