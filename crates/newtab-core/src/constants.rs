//! Application-wide constants
//!
//! Centralized location for thresholds, file names and grid dimensions
//! shared by the models, stores and the CLI.

/// Number of intro message impressions after which the message is disabled.
/// The message stays visible through the last impression.
pub const INTRO_MESSAGE_MAX_IMPRESSIONS: u32 = 3;

/// Rows of favorites shown while the section is collapsed.
pub const COLLAPSED_ROW_COUNT: usize = 2;

/// Favorites section starts collapsed until the user expands it.
pub const DEFAULT_FAVORITES_COLLAPSED: bool = true;

// Store file names (relative to the data dir)
pub const PREFERENCES_FILE: &str = "newtab_preferences.json";
pub const FAVORITES_FILE: &str = "favorites.json";

/// Title of the favorites section header.
pub const FAVORITES_SECTION_TITLE: &str = "Favorites";

// Grid dimensions
pub mod grid {
    /// Columns on a compact-width device held in portrait.
    pub const COMPACT_PORTRAIT_COLUMNS: usize = 4;
    /// Columns in landscape or on regular-width devices.
    pub const WIDE_COLUMNS: usize = 6;
}
