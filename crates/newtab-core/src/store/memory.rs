//! In-memory stores for tests and hosts that persist elsewhere.

use crate::constants::DEFAULT_FAVORITES_COLLAPSED;
use crate::models::{Favorite, FavoritesStoring, NewTabPageIntroDataStoring};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct InMemoryIntroDataStore {
    enabled: RwLock<Option<bool>>,
}

impl InMemoryIntroDataStore {
    pub fn new(enabled: Option<bool>) -> Self {
        Self {
            enabled: RwLock::new(enabled),
        }
    }

    /// Raw stored value, `None` while unset.
    pub fn stored_value(&self) -> Option<bool> {
        *self.enabled.read()
    }
}

impl NewTabPageIntroDataStoring for InMemoryIntroDataStore {
    fn intro_message_enabled(&self) -> bool {
        self.enabled.read().unwrap_or(false)
    }

    fn set_intro_message_enabled(&self, enabled: bool) {
        *self.enabled.write() = Some(enabled);
    }
}

#[derive(Debug)]
pub struct InMemoryFavoritesStore {
    favorites: RwLock<Vec<Favorite>>,
    collapsed: RwLock<bool>,
    saves: AtomicUsize,
}

impl Default for InMemoryFavoritesStore {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_FAVORITES_COLLAPSED)
    }
}

impl InMemoryFavoritesStore {
    pub fn new(favorites: Vec<Favorite>, collapsed: bool) -> Self {
        Self {
            favorites: RwLock::new(favorites),
            collapsed: RwLock::new(collapsed),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save_favorites` calls seen.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl FavoritesStoring for InMemoryFavoritesStore {
    fn favorites(&self) -> Vec<Favorite> {
        self.favorites.read().clone()
    }

    fn save_favorites(&self, favorites: &[Favorite]) {
        *self.favorites.write() = favorites.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
    }

    fn is_collapsed(&self) -> bool {
        *self.collapsed.read()
    }

    fn set_collapsed(&self, collapsed: bool) {
        *self.collapsed.write() = collapsed;
    }
}
