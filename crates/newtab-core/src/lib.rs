// UniFFI scaffolding for generating Swift/Kotlin bindings
uniffi::setup_scaffolding!();

pub mod config;
pub mod constants;
pub mod events;
pub mod ffi;
pub mod models;
pub mod pixel;
pub mod store;
pub mod tracing_setup;

// Re-export FFI types at crate root for convenience
pub use ffi::{FavoriteInfo, NewTabPageCore, NewTabPageError, PrefixedFavoritesInfo};
pub use pixel::{Pixel, PixelFiring};
