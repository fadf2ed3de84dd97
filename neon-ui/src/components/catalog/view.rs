//! Catalog view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogState>` and uses lenses for the fields it shows.
//! The filtered list is derived on every render (every keystroke or chip
//! click); there is no debounce.

use crate::components::catalog::{
    ArtistCard, CatalogTabBar, GenreFilterBar, PlaylistsPanel, TrackRow,
};
use crate::components::icons::SearchIcon;
use crate::components::TextInput;
use crate::display_types::{CatalogTab, GenreFilter, Track};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};
use dioxus::prelude::*;
use neon_common::PlaybackSelection;

#[component]
pub fn CatalogView(
    state: ReadStore<CatalogState>,
    /// Used to highlight the active row
    selection: PlaybackSelection,
    on_query_change: EventHandler<String>,
    on_genre_select: EventHandler<GenreFilter>,
    on_tab_change: EventHandler<CatalogTab>,
    on_play_track: EventHandler<Track>,
) -> Element {
    let query = state.query().read().clone();
    let genre_filter = state.genre_filter().read().clone();
    let tab = *state.tab().read();
    let filtered = state.read().filtered_tracks();
    let artists = state.artists().read().clone();

    rsx! {
        section { class: "mb-8",
            div { class: "flex gap-4 mb-6 flex-wrap",
                div { class: "flex-1 relative min-w-[240px]",
                    div { class: "absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground",
                        SearchIcon { class: "w-5 h-5" }
                    }
                    TextInput {
                        value: query,
                        on_input: on_query_change,
                        placeholder: "Search tracks or artists...",
                        with_leading_icon: true,
                    }
                }
                GenreFilterBar {
                    chips: GenreFilter::chips(),
                    selected: genre_filter,
                    on_select: on_genre_select,
                }
            }
        }

        CatalogTabBar { active: tab, on_change: on_tab_change }

        {match tab {
            CatalogTab::Tracks => rsx! {
                TrackList { tracks: filtered, selection, on_play_track }
            },
            CatalogTab::Artists => rsx! {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                    for artist in artists {
                        ArtistCard { key: "{artist.id}", artist: artist.clone() }
                    }
                }
            },
            CatalogTab::Playlists => rsx! {
                PlaylistsPanel {}
            },
        }}
    }
}

#[component]
fn TrackList(
    tracks: Vec<Track>,
    selection: PlaybackSelection,
    on_play_track: EventHandler<Track>,
) -> Element {
    if tracks.is_empty() {
        return rsx! {
            div { class: "text-center py-12 text-muted-foreground", "No tracks match your search" }
        };
    }

    rsx! {
        div { class: "space-y-4",
            for track in tracks {
                TrackRow {
                    key: "{track.id}",
                    is_active: selection.is_playing_track(track.id),
                    track: track.clone(),
                    on_play: on_play_track,
                }
            }
        }
    }
}
