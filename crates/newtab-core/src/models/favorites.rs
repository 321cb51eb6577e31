//! Favorites list behind the New Tab Page grid.

use super::Favorite;
use crate::constants::COLLAPSED_ROW_COUNT;
use crate::events::{ChangeObserver, NewTabPageChange, Observers};
use crate::pixel::{Pixel, PixelFiring};
use serde::Serialize;
use std::sync::Arc;

/// Favorites to render plus whether the section can be collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixedFavorites {
    pub items: Vec<Favorite>,
    pub is_collapsible: bool,
}

/// Operations the grid forwards user actions to.
pub trait FavoritesModel {
    /// Favorites visible for a grid with `columns` columns.
    fn prefixed_favorites(&self, columns: usize) -> PrefixedFavorites;
    fn move_favorites(&mut self, from: usize, to: usize);
    fn delete_favorite(&mut self, favorite: &Favorite);
    fn edit_favorite(&mut self, favorite: &Favorite);
    fn favorite_selected(&mut self, favorite: &Favorite);
    fn toggle_collapse(&mut self);
    fn is_collapsed(&self) -> bool;
    fn toggle_tooltip(&mut self);
    fn is_showing_tooltip(&self) -> bool;
}

/// Ordered favorites collection plus the persisted collapse state.
pub trait FavoritesStoring: Send + Sync {
    fn favorites(&self) -> Vec<Favorite>;
    fn save_favorites(&self, favorites: &[Favorite]);
    fn is_collapsed(&self) -> bool;
    fn set_collapsed(&self, collapsed: bool);
}

/// Receives actions that leave the New Tab Page (navigation, edit sheet).
pub trait FavoritesDelegate: Send + Sync {
    fn favorite_selected(&self, favorite: &Favorite);
    fn favorite_edit_requested(&self, favorite: &Favorite);
}

/// Delegate that drops every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFavoritesDelegate;

impl FavoritesDelegate for NoopFavoritesDelegate {
    fn favorite_selected(&self, _favorite: &Favorite) {}
    fn favorite_edit_requested(&self, _favorite: &Favorite) {}
}

pub struct FavoritesListModel {
    store: Arc<dyn FavoritesStoring>,
    delegate: Arc<dyn FavoritesDelegate>,
    pixel_firing: Arc<dyn PixelFiring>,
    favorites: Vec<Favorite>,
    is_collapsed: bool,
    is_showing_tooltip: bool,
    observers: Observers,
}

impl FavoritesListModel {
    pub fn new(
        store: Arc<dyn FavoritesStoring>,
        delegate: Arc<dyn FavoritesDelegate>,
        pixel_firing: Arc<dyn PixelFiring>,
    ) -> Self {
        let favorites = store.favorites();
        let is_collapsed = store.is_collapsed();
        Self {
            store,
            delegate,
            pixel_firing,
            favorites,
            is_collapsed,
            is_showing_tooltip: false,
            observers: Observers::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn ChangeObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Favorite> {
        self.favorites.get(index)
    }

    /// Append a favorite to the end of the list.
    pub fn add_favorite(&mut self, favorite: Favorite) {
        tracing::debug!(id = %favorite.id, "adding favorite");
        self.favorites.push(favorite);
        self.persist();
    }

    /// Re-read the store, e.g. after another surface changed it.
    pub fn reload(&mut self) {
        self.favorites = self.store.favorites();
        self.is_collapsed = self.store.is_collapsed();
        self.observers.notify(NewTabPageChange::Favorites);
    }

    fn persist(&self) {
        self.store.save_favorites(&self.favorites);
        self.observers.notify(NewTabPageChange::Favorites);
    }
}

impl FavoritesModel for FavoritesListModel {
    fn prefixed_favorites(&self, columns: usize) -> PrefixedFavorites {
        let max_collapsed = columns.max(1) * COLLAPSED_ROW_COUNT;
        let is_collapsible = self.favorites.len() > max_collapsed;
        let items = if self.is_collapsed {
            self.favorites.iter().take(max_collapsed).cloned().collect()
        } else {
            self.favorites.clone()
        };

        PrefixedFavorites {
            items,
            is_collapsible,
        }
    }

    fn move_favorites(&mut self, from: usize, to: usize) {
        let len = self.favorites.len();
        if from >= len {
            tracing::warn!(from, len, "move_favorites: source index out of range");
            return;
        }
        let to = to.min(len - 1);
        if from == to {
            return;
        }

        let favorite = self.favorites.remove(from);
        self.favorites.insert(to, favorite);
        tracing::debug!(from, to, "favorites reordered");
        self.persist();
    }

    fn delete_favorite(&mut self, favorite: &Favorite) {
        let Some(index) = self.favorites.iter().position(|f| f.id == favorite.id) else {
            tracing::warn!(id = %favorite.id, "delete_favorite: unknown favorite");
            return;
        };

        self.favorites.remove(index);
        tracing::debug!(id = %favorite.id, "favorite deleted");
        self.persist();
    }

    fn edit_favorite(&mut self, favorite: &Favorite) {
        self.delegate.favorite_edit_requested(favorite);
    }

    fn favorite_selected(&mut self, favorite: &Favorite) {
        self.pixel_firing.fire(Pixel::FavoriteLaunched);
        self.delegate.favorite_selected(favorite);
    }

    fn toggle_collapse(&mut self) {
        self.is_collapsed = !self.is_collapsed;
        self.store.set_collapsed(self.is_collapsed);
        self.observers.notify(NewTabPageChange::Collapse {
            collapsed: self.is_collapsed,
        });
    }

    fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    fn toggle_tooltip(&mut self) {
        self.is_showing_tooltip = !self.is_showing_tooltip;
        self.observers.notify(NewTabPageChange::Tooltip {
            visible: self.is_showing_tooltip,
        });
    }

    fn is_showing_tooltip(&self) -> bool {
        self.is_showing_tooltip
    }
}

impl std::fmt::Debug for FavoritesListModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesListModel")
            .field("favorites", &self.favorites.len())
            .field("is_collapsed", &self.is_collapsed)
            .field("is_showing_tooltip", &self.is_showing_tooltip)
            .finish()
    }
}
