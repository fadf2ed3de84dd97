//! Playback UI state store

use crate::display_types::Track;
use dioxus::prelude::*;
use neon_common::PlaybackSelection;

/// UI state for the now-playing bar
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PlaybackUiState {
    /// Selected track, play flag and volume
    pub selection: PlaybackSelection,
}

impl PlaybackUiState {
    /// Preselects the first catalog entry, paused.
    pub fn for_catalog(tracks: &[Track]) -> Self {
        Self {
            selection: PlaybackSelection::new(tracks.first().cloned()),
        }
    }
}
