//! Left-navigation menu entry

use serde::{Deserialize, Serialize};

/// A single entry in the left navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Translated display title
    pub title: String,
    /// Icon name, or `img:<url>` for image icons
    pub icon: String,
    /// Route path
    pub link: String,
}

impl MenuEntry {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            link: link.into(),
        }
    }

    /// Icon reference for an image asset
    pub fn image_icon(url: &str) -> String {
        format!("img:{}", url)
    }
}
