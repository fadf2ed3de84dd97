//! Built-in demo catalog
//!
//! Shown at mount and kept whenever the tracks function is unreachable or
//! empty. The artists are only ever local.

use neon_common::{Artist, Track};
use neon_ui::stores::CatalogState;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::warn;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/catalog.json");

#[derive(Debug, Default, Deserialize)]
struct FixtureData {
    tracks: Vec<Track>,
    artists: Vec<Artist>,
}

static DEMO_DATA: OnceLock<FixtureData> = OnceLock::new();

fn get_demo_data() -> &'static FixtureData {
    DEMO_DATA.get_or_init(|| {
        serde_json::from_str(FIXTURE_JSON).unwrap_or_else(|e| {
            warn!("Demo catalog fixture is invalid: {e}");
            FixtureData::default()
        })
    })
}

pub fn demo_tracks() -> Vec<Track> {
    get_demo_data().tracks.clone()
}

pub fn demo_artists() -> Vec<Artist> {
    get_demo_data().artists.clone()
}

/// Catalog state for a freshly mounted page
pub fn demo_catalog() -> CatalogState {
    CatalogState::new(demo_tracks(), demo_artists())
}
