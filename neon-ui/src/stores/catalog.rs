//! Catalog state store

use crate::display_types::{Artist, CatalogTab, GenreFilter, Track};
use dioxus::prelude::*;
use neon_common::filter_tracks;

/// State for the catalog view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Full in-memory catalog, in display order
    pub tracks: Vec<Track>,
    /// Artists shown on the artists tab
    pub artists: Vec<Artist>,
    /// Free-text search
    pub query: String,
    /// Selected genre chip
    pub genre_filter: GenreFilter,
    /// Active tab
    pub tab: CatalogTab,
    /// Whether a catalog refresh is in flight
    pub refreshing: bool,
    /// Bumped by every refresh; only the newest one may write its result
    pub refresh_generation: u64,
    /// Last refresh error, cleared on dismiss or on the next successful refresh
    pub error: Option<String>,
}

impl CatalogState {
    pub fn new(tracks: Vec<Track>, artists: Vec<Artist>) -> Self {
        Self {
            tracks,
            artists,
            ..Default::default()
        }
    }

    /// Start a refresh that supersedes any still in flight; returns its generation
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_generation += 1;
        self.refreshing = true;
        self.refresh_generation
    }

    pub fn is_latest_refresh(&self, generation: u64) -> bool {
        self.refresh_generation == generation
    }

    /// Tracks matching the current query and genre filter
    pub fn filtered_tracks(&self) -> Vec<Track> {
        filter_tracks(&self.tracks, &self.query, &self.genre_filter)
            .into_iter()
            .cloned()
            .collect()
    }
}
