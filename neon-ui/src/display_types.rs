//! Display types for UI components
//!
//! Catalog records come straight from neon-common; this module adds the
//! UI-only shapes (notifications, tabs, nav items).

pub use neon_common::{Artist, Genre, GenreFilter, Track};

/// Notification style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Errors and rejected input
    Destructive,
}

/// A message for the toast side channel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_string(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Tabs of the catalog view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogTab {
    #[default]
    Tracks,
    Artists,
    Playlists,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 3] = [CatalogTab::Tracks, CatalogTab::Artists, CatalogTab::Playlists];

    pub fn label(self) -> &'static str {
        match self {
            CatalogTab::Tracks => "Tracks",
            CatalogTab::Artists => "Artists",
            CatalogTab::Playlists => "Playlists",
        }
    }
}

/// Navigation item for the header
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}
