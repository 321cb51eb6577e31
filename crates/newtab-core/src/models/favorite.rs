use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-pinned shortcut shown in the New Tab Page grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Stable identifier (UUID v4)
    pub id: String,
    pub title: String,
    /// Target URL; may be empty for favorites imported without one
    #[serde(default)]
    pub url: String,
}

impl Favorite {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            url: url.into(),
        }
    }

    /// Title for the grid label, falling back to the URL host.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if !title.is_empty() {
            return title;
        }
        host_of(&self.url).unwrap_or(&self.url)
    }

    /// Plain-text payload carried while the favorite is dragged.
    pub fn drag_payload(&self) -> &str {
        &self.url
    }
}

fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, rest)| rest)?;
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.rsplit('@').next()?;
    let host = host.split(':').next()?;
    (!host.is_empty()).then_some(host)
}
