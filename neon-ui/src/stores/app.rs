//! Top-level application state store
//!
//! Components access state via lensing: `app.catalog().query()`

use super::catalog::CatalogState;
use super::playback::PlaybackUiState;
use super::remote::{SeedState, UploadState};
use super::toasts::ToastState;
use dioxus::prelude::*;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Catalog data plus search/genre/tab selection
    pub catalog: CatalogState,
    /// Current track, play flag and volume
    pub playback: PlaybackUiState,
    /// Seed widget
    pub seed: SeedState,
    /// Upload dialog
    pub upload: UploadState,
    /// Pending toast notifications
    pub toasts: ToastState,
}

impl AppState {
    /// Initial state for a freshly mounted page; the first track is preselected.
    pub fn with_catalog(catalog: CatalogState) -> Self {
        let playback = PlaybackUiState::for_catalog(&catalog.tracks);
        Self {
            catalog,
            playback,
            ..Default::default()
        }
    }
}
