//! FFI module for UniFFI bindings
//!
//! Exposes the New Tab Page models to Swift/Kotlin via UniFFI.
//! Keep this API simple: no async functions, only basic types.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::CoreConfig;
use crate::events::{ChangeObserver, NewTabPageChange};
use crate::models::{
    Favorite, FavoritesDelegate, FavoritesGridPresenter, FavoritesListModel, FavoritesModel,
    NewTabPageModel, SizeClass,
};
use crate::pixel::{Pixel, PixelFiring, SharedPixelStats, TracingPixelFiring};
use crate::store::{FavoritesStorage, PreferencesStorage};

// Keep UniFFI exports split by domain-specific *_api.rs modules.
mod callback_api;
mod favorites_api;
mod intro_api;
mod lifecycle_api;

/// Errors that can occur during New Tab Page operations.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NewTabPageError {
    #[error("Core not initialized")]
    CoreNotInitialized,
    #[error("Lock error: failed to acquire lock on {resource}")]
    LockError { resource: String },
    #[error("Index {index} out of range for {len} favorites")]
    InvalidIndex { index: u32, len: u32 },
    #[error("Favorite not found: {id}")]
    FavoriteNotFound { id: String },
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Favorite as seen by the native UI.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FavoriteInfo {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Title to render, falling back to the URL host
    pub display_title: String,
}

impl From<&Favorite> for FavoriteInfo {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id.clone(),
            title: favorite.title.clone(),
            url: favorite.url.clone(),
            display_title: favorite.display_title().to_string(),
        }
    }
}

/// Grid content for the current size class and orientation.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PrefixedFavoritesInfo {
    pub columns: u32,
    pub items: Vec<FavoriteInfo>,
    pub is_collapsible: bool,
    pub is_collapsed: bool,
}

/// Fired-pixel count for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PixelCount {
    pub pixel: Pixel,
    pub name: String,
    pub count: u64,
}

/// Receives every pixel fired by the core. The native app forwards these to
/// its analytics endpoint.
#[uniffi::export(callback_interface)]
pub trait PixelCallback: Send + Sync {
    fn on_pixel(&self, pixel: Pixel, name: String);
}

/// Receives model changes so views can re-render.
///
/// # Thread Safety
/// Invoked on the thread that called into the core, after the core has
/// released its own locks, so the callback may call back into the core.
#[uniffi::export(callback_interface)]
pub trait ChangeCallback: Send + Sync {
    fn on_change(&self, change: NewTabPageChange);
}

/// Receives favorite actions that leave the New Tab Page.
#[uniffi::export(callback_interface)]
pub trait FavoritesCallback: Send + Sync {
    fn on_favorite_selected(&self, favorite: FavoriteInfo);
    fn on_favorite_edit_requested(&self, favorite: FavoriteInfo);
}

/// Host notification produced while a model lock is held.
#[derive(Debug, Clone)]
enum Outgoing {
    Pixel(Pixel),
    Change(NewTabPageChange),
    Selected(FavoriteInfo),
    EditRequested(FavoriteInfo),
}

/// Notifications waiting for the model lock to be released.
#[derive(Default)]
struct Outbox {
    pending: parking_lot::Mutex<Vec<Outgoing>>,
}

impl Outbox {
    fn push(&self, outgoing: Outgoing) {
        self.pending.lock().push(outgoing);
    }

    fn drain(&self) -> Vec<Outgoing> {
        std::mem::take(&mut *self.pending.lock())
    }
}

fn registered<T: ?Sized>(slot: &RwLock<Option<Arc<T>>>) -> Option<Arc<T>> {
    slot.read().ok().and_then(|guard| guard.clone())
}

/// Pixel sink handed to the models: logs and counts now, forwards to the host
/// once the model lock is released.
struct PixelBridge {
    stats: SharedPixelStats,
    outbox: Arc<Outbox>,
    callback: RwLock<Option<Arc<dyn PixelCallback>>>,
}

impl PixelFiring for PixelBridge {
    fn fire(&self, pixel: Pixel) {
        TracingPixelFiring.fire(pixel);
        self.stats.record(pixel);
        self.outbox.push(Outgoing::Pixel(pixel));
    }
}

struct ChangeBridge {
    outbox: Arc<Outbox>,
    callback: RwLock<Option<Arc<dyn ChangeCallback>>>,
}

impl ChangeObserver for ChangeBridge {
    fn on_change(&self, change: NewTabPageChange) {
        self.outbox.push(Outgoing::Change(change));
    }
}

struct FavoritesBridge {
    outbox: Arc<Outbox>,
    callback: RwLock<Option<Arc<dyn FavoritesCallback>>>,
}

impl FavoritesDelegate for FavoritesBridge {
    fn favorite_selected(&self, favorite: &Favorite) {
        self.outbox.push(Outgoing::Selected(favorite.into()));
    }

    fn favorite_edit_requested(&self, favorite: &Favorite) {
        self.outbox.push(Outgoing::EditRequested(favorite.into()));
    }
}

/// New Tab Page functionality exposed to foreign languages.
///
/// UniFFI objects are shared behind `Arc`, so all state uses interior mutability.
#[derive(uniffi::Object)]
pub struct NewTabPageCore {
    initialized: AtomicBool,
    data_dir: RwLock<Option<PathBuf>>,
    /// Shared with the intro model; the host re-enables the message through it
    intro_store: RwLock<Option<Arc<PreferencesStorage>>>,
    intro_model: RwLock<Option<NewTabPageModel>>,
    favorites_model: RwLock<Option<FavoritesListModel>>,
    outbox: Arc<Outbox>,
    pixels: Arc<PixelBridge>,
    changes: Arc<ChangeBridge>,
    favorites_delegate: Arc<FavoritesBridge>,
}

impl NewTabPageCore {
    fn lock_error(resource: &str) -> NewTabPageError {
        NewTabPageError::LockError {
            resource: resource.to_string(),
        }
    }

    /// Run `f` against the intro model, then deliver what it queued for the
    /// host with the model lock released.
    fn with_intro<R>(
        &self,
        f: impl FnOnce(&mut NewTabPageModel) -> R,
    ) -> Result<R, NewTabPageError> {
        let result = {
            let mut guard = self
                .intro_model
                .write()
                .map_err(|_| Self::lock_error("intro_model"))?;
            let model = guard.as_mut().ok_or(NewTabPageError::CoreNotInitialized)?;
            f(model)
        };
        self.dispatch_pending();
        Ok(result)
    }

    fn with_favorites<R>(
        &self,
        f: impl FnOnce(&mut FavoritesListModel) -> Result<R, NewTabPageError>,
    ) -> Result<R, NewTabPageError> {
        let result = {
            let mut guard = self
                .favorites_model
                .write()
                .map_err(|_| Self::lock_error("favorites_model"))?;
            let model = guard.as_mut().ok_or(NewTabPageError::CoreNotInitialized)?;
            f(model)
        };
        self.dispatch_pending();
        result
    }

    /// Deliver queued notifications to the registered callbacks.
    /// Must not be called while a model lock is held.
    fn dispatch_pending(&self) {
        for outgoing in self.outbox.drain() {
            match outgoing {
                Outgoing::Pixel(pixel) => {
                    if let Some(callback) = registered(&self.pixels.callback) {
                        callback.on_pixel(pixel, pixel.name().to_string());
                    }
                }
                Outgoing::Change(change) => {
                    if let Some(callback) = registered(&self.changes.callback) {
                        callback.on_change(change);
                    }
                }
                Outgoing::Selected(favorite) => {
                    if let Some(callback) = registered(&self.favorites_delegate.callback) {
                        callback.on_favorite_selected(favorite);
                    }
                }
                Outgoing::EditRequested(favorite) => {
                    if let Some(callback) = registered(&self.favorites_delegate.callback) {
                        callback.on_favorite_edit_requested(favorite);
                    }
                }
            }
        }
    }

    fn build_models(
        &self,
        config: &CoreConfig,
    ) -> (Arc<PreferencesStorage>, NewTabPageModel, FavoritesListModel) {
        let pixels: Arc<dyn PixelFiring> = self.pixels.clone();
        let intro_store = Arc::new(PreferencesStorage::new(config.preferences_path()));

        let mut intro = NewTabPageModel::new(intro_store.clone(), pixels.clone());
        intro.subscribe(self.changes.clone());

        let mut favorites = FavoritesListModel::new(
            Arc::new(FavoritesStorage::new(config.favorites_path())),
            self.favorites_delegate.clone(),
            pixels,
        );
        favorites.subscribe(self.changes.clone());

        (intro_store, intro, favorites)
    }
}

fn find_favorite(model: &FavoritesListModel, id: &str) -> Result<Favorite, NewTabPageError> {
    model
        .favorites()
        .iter()
        .find(|f| f.id == id)
        .cloned()
        .ok_or_else(|| NewTabPageError::FavoriteNotFound { id: id.to_string() })
}

fn presenter_for(size_class: SizeClass, is_landscape: bool) -> FavoritesGridPresenter {
    FavoritesGridPresenter::new(size_class, is_landscape)
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
