//! Theme catalog.
//!
//! Read-only mapping from theme key to display name and optional feature
//! image, consumed only by the presentation layer. The built-in catalog
//! can be replaced wholesale by a `themes.json` file in the data
//! directory; the selected key is persisted through the [`Store`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::storage::Store;

const SELECTED_THEME_KEY: &str = "selectedTheme";

/// Fallback when nothing is selected or the selection no longer exists.
pub const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(
        default,
        rename = "featureImage",
        skip_serializing_if = "Option::is_none"
    )]
    pub feature_image: Option<String>,
}

/// The full set of available themes, keyed by theme key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeCatalog {
    themes: BTreeMap<String, Theme>,
}

impl ThemeCatalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let themes = [
            ("default", "Default"),
            ("dark", "Dark"),
            ("nature", "Nature"),
            ("ocean", "Ocean"),
        ]
        .into_iter()
        .map(|(key, name)| {
            (
                key.to_string(),
                Theme {
                    name: name.to_string(),
                    feature_image: None,
                },
            )
        })
        .collect();
        Self { themes }
    }

    /// Load `themes.json` from the data directory, falling back to the
    /// built-in catalog when the file is absent or malformed.
    pub fn load() -> Self {
        let Ok(dir) = crate::storage::data_dir() else {
            return Self::builtin();
        };
        let path = dir.join("themes.json");
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed {}: {e}", path.display());
                Self::builtin()
            }),
            Err(_) => Self::builtin(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.themes.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.themes.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Currently selected theme key. Missing or no-longer-known selections
    /// fall back to [`DEFAULT_THEME`].
    pub fn selected(&self, store: &dyn Store) -> String {
        match store.get(SELECTED_THEME_KEY) {
            Ok(Some(key)) if self.themes.contains_key(&key) => key,
            _ => DEFAULT_THEME.to_string(),
        }
    }

    /// Persist a theme selection.
    ///
    /// # Errors
    ///
    /// Rejects keys not present in the catalog; propagates store failures.
    pub fn select(&self, store: &dyn Store, key: &str) -> Result<(), CoreError> {
        if !self.themes.contains_key(key) {
            return Err(ValidationError::UnknownTheme(key.to_string()).into());
        }
        store.set(SELECTED_THEME_KEY, key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn builtin_catalog_has_the_default_theme() {
        let catalog = ThemeCatalog::builtin();
        assert!(catalog.get(DEFAULT_THEME).is_some());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn select_and_read_back() {
        let db = Database::open_memory().unwrap();
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.selected(&db), "default");
        catalog.select(&db, "ocean").unwrap();
        assert_eq!(catalog.selected(&db), "ocean");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let db = Database::open_memory().unwrap();
        let catalog = ThemeCatalog::builtin();
        assert!(catalog.select(&db, "vaporwave").is_err());
        assert_eq!(catalog.selected(&db), "default");
    }

    #[test]
    fn stale_selection_falls_back_to_default() {
        let db = Database::open_memory().unwrap();
        let catalog = ThemeCatalog::builtin();
        db.kv_set("selectedTheme", "removed-theme").unwrap();
        assert_eq!(catalog.selected(&db), "default");
    }

    #[test]
    fn catalog_parses_feature_images() {
        let json = r#"{"forest":{"name":"Forest","featureImage":"images/forest.jpg"}}"#;
        let catalog: ThemeCatalog = serde_json::from_str(json).unwrap();
        let theme = catalog.get("forest").unwrap();
        assert_eq!(theme.name, "Forest");
        assert_eq!(theme.feature_image.as_deref(), Some("images/forest.jpg"));
    }
}
