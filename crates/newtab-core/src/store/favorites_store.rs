use super::{load_json, save_json, StorageError};
use crate::constants::DEFAULT_FAVORITES_COLLAPSED;
use crate::models::{Favorite, FavoritesStoring};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_collapsed() -> bool {
    DEFAULT_FAVORITES_COLLAPSED
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct FavoritesFile {
    #[serde(default)]
    favorites: Vec<Favorite>,
    #[serde(default = "default_collapsed")]
    collapsed: bool,
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            collapsed: DEFAULT_FAVORITES_COLLAPSED,
        }
    }
}

/// Storage for favorites (persisted to JSON file)
pub struct FavoritesStorage {
    path: PathBuf,
    data: RwLock<FavoritesFile>,
    last_error: RwLock<Option<StorageError>>,
}

impl FavoritesStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let (data, last_error) = load_json(&path);
        Self {
            path,
            data: RwLock::new(data),
            last_error: RwLock::new(last_error),
        }
    }

    pub fn last_error(&self) -> Option<StorageError> {
        self.last_error.read().clone()
    }

    fn update(&self, apply: impl FnOnce(&mut FavoritesFile)) {
        let mut data = self.data.write();
        apply(&mut data);
        let result = save_json(&self.path, &*data);
        drop(data);

        if let Err(e) = &result {
            tracing::error!("Failed to save favorites: {}", e);
        }
        *self.last_error.write() = result.err();
    }
}

impl FavoritesStoring for FavoritesStorage {
    fn favorites(&self) -> Vec<Favorite> {
        self.data.read().favorites.clone()
    }

    fn save_favorites(&self, favorites: &[Favorite]) {
        self.update(|data| data.favorites = favorites.to_vec());
    }

    fn is_collapsed(&self) -> bool {
        self.data.read().collapsed
    }

    fn set_collapsed(&self, collapsed: bool) {
        self.update(|data| data.collapsed = collapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_store_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FavoritesStorage::new(dir.path().join("favorites.json"));

        assert!(storage.favorites().is_empty());
        assert!(storage.is_collapsed());
        assert!(storage.last_error().is_none());
    }

    #[test]
    fn test_order_and_collapse_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let favorites = vec![
            Favorite::new("B", "https://b.example"),
            Favorite::new("A", "https://a.example"),
        ];

        let storage = FavoritesStorage::new(&path);
        storage.save_favorites(&favorites);
        storage.set_collapsed(false);

        let reloaded = FavoritesStorage::new(&path);
        assert_eq!(reloaded.favorites(), favorites);
        assert!(!reloaded.is_collapsed());
    }

    #[test]
    fn test_missing_collapsed_field_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(
            &path,
            r#"{"favorites": [{"id": "1", "title": "One", "url": "https://one.example"}]}"#,
        )
        .unwrap();

        let storage = FavoritesStorage::new(&path);

        assert_eq!(storage.favorites().len(), 1);
        assert!(storage.is_collapsed());
    }
}
