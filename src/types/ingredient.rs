//! User-side ingredient list and pantry staples.
//!
//! The list holds what the user typed this session; pantry staples are the
//! long-lived set of things always considered on hand. Both enforce
//! case-insensitive name uniqueness. [`merge_with_pantry`] produces the
//! combined set handed to search and ranking.

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_PANTRY_STAPLES;
use crate::{PantryError, Result};

/// Where an ingredient in the merged set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientOrigin {
    /// Entered by the user this session.
    Entered,
    /// From the pantry staple set.
    Pantry,
}

/// An ingredient the user has on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Opaque identifier; identity of the entry.
    pub id: String,
    /// Display name, trimmed.
    pub name: String,
    pub origin: IngredientOrigin,
}

/// Ordered list of user-entered ingredients with unique names.
#[derive(Debug, Clone, Default)]
pub struct IngredientList {
    items: Vec<Ingredient>,
    next_id: u64,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient by name.
    ///
    /// The name is trimmed. Blank names are rejected with
    /// [`PantryError::InvalidInput`]; a name already present (ignoring case)
    /// is rejected with [`PantryError::DuplicateIngredient`].
    pub fn add(&mut self, name: &str) -> Result<&Ingredient> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::InvalidInput("ingredient name is empty".into()));
        }
        if self.contains_name(name) {
            return Err(PantryError::DuplicateIngredient(name.to_owned()));
        }

        self.next_id += 1;
        self.items.push(Ingredient {
            id: format!("ing-{}", self.next_id),
            name: name.to_owned(),
            origin: IngredientOrigin::Entered,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove an ingredient by id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Ingredient> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Whether a name is present, ignoring case.
    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.items.iter().any(|i| i.name.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    /// Names in entry order.
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Ingredient names always treated as available.
///
/// Names are unique ignoring case; the spelling first inserted is kept.
/// Serialized as a plain list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PantryStaples {
    names: Vec<String>,
}

impl PantryStaples {
    /// An empty staple set.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Add a staple. Returns `false` if it was already present or blank.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    /// Remove a staple, ignoring case. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        let needle = name.trim().to_lowercase();
        self.names.retain(|n| n.to_lowercase() != needle);
        self.names.len() != before
    }

    /// Whether a staple is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.names.iter().any(|n| n.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for PantryStaples {
    /// The built-in default staples.
    fn default() -> Self {
        DEFAULT_PANTRY_STAPLES.iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for PantryStaples {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut staples = Self::empty();
        for name in iter {
            staples.insert(name);
        }
        staples
    }
}

impl From<Vec<String>> for PantryStaples {
    fn from(names: Vec<String>) -> Self {
        names.iter().map(String::as_str).collect()
    }
}

impl From<PantryStaples> for Vec<String> {
    fn from(staples: PantryStaples) -> Self {
        staples.names
    }
}

/// Combine entered ingredients with pantry staples.
///
/// Entered ingredients that are also staples are dropped in favour of the
/// staple entry, so every name appears once. Entered ingredients come
/// first, then staples with `pantry-<name>` ids.
pub fn merge_with_pantry(list: &IngredientList, pantry: &PantryStaples) -> Vec<Ingredient> {
    list.iter()
        .filter(|i| !pantry.contains(&i.name))
        .cloned()
        .chain(pantry.iter().map(|name| Ingredient {
            id: format!("pantry-{name}"),
            name: name.to_owned(),
            origin: IngredientOrigin::Pantry,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_assigns_ids() {
        let mut list = IngredientList::new();
        let id1 = list.add("  Chicken ").unwrap().id.clone();
        let id2 = list.add("Rice").unwrap().id.clone();
        assert_ne!(id1, id2);
        assert_eq!(list.names(), vec!["Chicken", "Rice"]);
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let mut list = IngredientList::new();
        list.add("Garlic").unwrap();
        let err = list.add("gARLIC").unwrap_err();
        assert!(matches!(err, PantryError::DuplicateIngredient(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_rejects_blank() {
        let mut list = IngredientList::new();
        assert!(matches!(
            list.add("   ").unwrap_err(),
            PantryError::InvalidInput(_)
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_by_id() {
        let mut list = IngredientList::new();
        let id = list.add("Beef").unwrap().id.clone();
        list.add("Onion").unwrap();

        let removed = list.remove(&id).unwrap();
        assert_eq!(removed.name, "Beef");
        assert!(list.remove(&id).is_none());
        assert_eq!(list.names(), vec!["Onion"]);
    }

    #[test]
    fn removed_name_can_be_added_again() {
        let mut list = IngredientList::new();
        let id = list.add("Milk").unwrap().id.clone();
        list.remove(&id);
        assert!(list.add("milk").is_ok());
    }

    #[test]
    fn pantry_is_case_insensitive() {
        let mut pantry = PantryStaples::empty();
        assert!(pantry.insert("Salt"));
        assert!(!pantry.insert("salt"));
        assert!(pantry.contains("SALT"));
        assert!(pantry.remove("sAlT"));
        assert!(pantry.is_empty());
    }

    #[test]
    fn default_pantry_has_builtin_staples() {
        let pantry = PantryStaples::default();
        assert!(pantry.contains("Salt"));
        assert!(pantry.contains("Olive Oil"));
        assert_eq!(pantry.len(), DEFAULT_PANTRY_STAPLES.len());
    }

    #[test]
    fn merge_prefers_pantry_entry() {
        let mut list = IngredientList::new();
        list.add("Chicken").unwrap();
        list.add("salt").unwrap();
        let pantry: PantryStaples = ["Salt", "Flour"].into_iter().collect();

        let merged = merge_with_pantry(&list, &pantry);
        let names: Vec<_> = merged.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Salt", "Flour"]);

        let salt = merged.iter().find(|i| i.name == "Salt").unwrap();
        assert_eq!(salt.origin, IngredientOrigin::Pantry);
        assert_eq!(salt.id, "pantry-Salt");
    }

    #[test]
    fn pantry_serializes_as_list() {
        let pantry: PantryStaples = ["Salt", "Sugar"].into_iter().collect();
        let json = serde_json::to_string(&pantry).unwrap();
        assert_eq!(json, r#"["Salt","Sugar"]"#);

        let back: PantryStaples = serde_json::from_str(r#"["Salt","salt","Rice"]"#).unwrap();
        assert_eq!(back.len(), 2);
    }
}
