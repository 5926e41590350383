//! Local persistence of pantry staples and favorite recipes.
//!
//! State is a small JSON document. There is no schema versioning: a
//! missing file or missing field falls back to its default, and a corrupt
//! file is logged and treated as missing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::PantryStaples;
use crate::{PantryError, Result};

/// Favorite recipe ids, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now
    /// a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_owned());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Ids as a set, for [`RecipeFilter::favorites_only`](crate::ranking::RecipeFilter::favorites_only).
    pub fn to_set(&self) -> BTreeSet<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Everything persisted between sessions.
///
/// Keys are camelCase (`pantryStaples`, `favoriteRecipes`), the names the
/// web front end stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    #[serde(default)]
    pub pantry_staples: PantryStaples,
    #[serde(default)]
    pub favorite_recipes: Favorites,
}

/// JSON file store for [`SavedState`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data dir>/pantry/state.json`.
    pub fn default_location() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from(".local/share"));
        Self::new(base.join("pantry").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved state, or defaults when the file is missing or corrupt.
    pub fn load(&self) -> SavedState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SavedState::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read saved state");
                return SavedState::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt saved state");
                SavedState::default()
            }
        }
    }

    /// Save state (atomic write via tmp + rename).
    pub fn save(&self, state: &SavedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PantryError::Configuration(format!(
                    "failed to create state dir {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&tmp_path, json).map_err(|e| {
            PantryError::Configuration(format!(
                "failed to write state file {}: {e}",
                tmp_path.display()
            ))
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            PantryError::Configuration(format!(
                "failed to rename state file {} → {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_favorite() {
        let mut favs = Favorites::new();
        assert!(favs.toggle("52772"));
        assert!(favs.contains("52772"));
        assert!(!favs.toggle("52772"));
        assert!(favs.is_empty());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        let state = store.load();
        assert_eq!(state.pantry_staples, PantryStaples::default());
        assert!(state.favorite_recipes.is_empty());
    }

    #[test]
    fn missing_fields_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"favoriteRecipes": ["1"]}"#).unwrap();

        let state = StateStore::new(&path).load();
        assert!(state.favorite_recipes.contains("1"));
        assert!(state.pantry_staples.contains("Salt"));
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert_eq!(StateStore::new(&path).load(), SavedState::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("deep").join("state.json"));

        let mut state = SavedState {
            pantry_staples: ["Rice", "Butter"].into_iter().collect(),
            ..SavedState::default()
        };
        state.favorite_recipes.toggle("52772");
        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
    }

    #[test]
    fn saved_keys_are_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        let mut state = SavedState::default();
        state.favorite_recipes.toggle("52772");
        store.save(&state).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["favoriteRecipes"], serde_json::json!(["52772"]));
        assert!(raw["pantryStaples"].as_array().unwrap().contains(&"Salt".into()));
        assert!(raw.get("favorite_recipes").is_none());
    }

    #[test]
    fn reads_front_end_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"pantryStaples": ["Rice"], "favoriteRecipes": ["52772", "1"]}"#,
        )
        .unwrap();

        let state = StateStore::new(&path).load();
        assert_eq!(state.pantry_staples.iter().collect::<Vec<_>>(), vec!["Rice"]);
        assert_eq!(state.favorite_recipes.len(), 2);
    }

    #[test]
    fn default_location_ends_with_state_file() {
        let store = StateStore::default_location();
        assert!(store.path().ends_with("pantry/state.json"));
    }
}
