use std::fmt::Write;

use newtab_core::models::{Chevron, Favorite};
use serde::Serialize;

/// Result of one CLI command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Intro {
        visible: bool,
        stored: Option<bool>,
        impressions: u32,
    },
    Favorites {
        columns: usize,
        collapsed: bool,
        toggle: Option<Chevron>,
        items: Vec<Favorite>,
    },
    Favorite {
        action: String,
        index: usize,
        favorite: Favorite,
    },
    Collapse {
        collapsed: bool,
    },
}

/// A report plus the side effects observed while producing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    #[serde(flatten)]
    pub report: Report,
    /// Pixel names fired, in order
    pub pixels: Vec<String>,
    /// Requests handed to the host (navigation, edit sheet)
    pub requests: Vec<String>,
}

impl Outcome {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match &self.report {
            Report::Intro {
                visible,
                stored,
                impressions,
            } => {
                let stored = match stored {
                    Some(true) => "enabled",
                    Some(false) => "disabled",
                    None => "unset",
                };
                let _ = writeln!(
                    out,
                    "intro message: {} (stored: {}, impressions this page: {})",
                    if *visible { "visible" } else { "hidden" },
                    stored,
                    impressions
                );
            }
            Report::Favorites {
                columns,
                collapsed,
                toggle,
                items,
            } => {
                let state = if *collapsed { "collapsed" } else { "expanded" };
                let _ = writeln!(
                    out,
                    "{} ({} columns, {})",
                    newtab_core::constants::FAVORITES_SECTION_TITLE,
                    columns,
                    state
                );
                if items.is_empty() {
                    let _ = writeln!(out, "  (none)");
                }
                for (i, favorite) in items.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "  {:>2}. {} <{}>",
                        i,
                        favorite.display_title(),
                        favorite.url
                    );
                }
                match toggle {
                    Some(Chevron::Down) => {
                        let _ = writeln!(out, "  [v] show more");
                    }
                    Some(Chevron::Up) => {
                        let _ = writeln!(out, "  [^] show less");
                    }
                    None => {}
                }
            }
            Report::Favorite {
                action,
                index,
                favorite,
            } => {
                let _ = writeln!(
                    out,
                    "{} #{}: {} <{}>",
                    action,
                    index,
                    favorite.display_title(),
                    favorite.url
                );
            }
            Report::Collapse { collapsed } => {
                let _ = writeln!(
                    out,
                    "favorites {}",
                    if *collapsed { "collapsed" } else { "expanded" }
                );
            }
        }

        for request in &self.requests {
            let _ = writeln!(out, "request: {}", request);
        }
        for pixel in &self.pixels {
            let _ = writeln!(out, "pixel: {}", pixel);
        }
        out.trim_end().to_string()
    }
}
