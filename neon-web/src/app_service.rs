//! AppService - owns the app store and runs the remote actions
//!
//! UI components access AppService via `use_app()` and:
//! - Read state reactively from `app.state`
//! - Call action methods like `app.seed_catalog()`
//!
//! Network work is spawned as Dioxus tasks; each store write is a short
//! synchronous update, nothing is held across an await.

use crate::actions::{self, ActionHost, RefreshHost, UploadHost};
use crate::api::HttpCatalogApi;
use crate::config::EndpointConfig;
use crate::demo_data::demo_catalog;
use dioxus::prelude::*;
use neon_common::{PlaybackSelection, Track, UploadForm};
use neon_ui::display_types::{CatalogTab, GenreFilter, Notification};
use neon_ui::stores::{
    AppState, AppStateStoreExt, CatalogState, CatalogStateStoreExt, PlaybackUiStateStoreExt,
    SeedStateStoreExt, UploadStateStoreExt,
};
use tracing::debug;

/// Created inside the Dioxus component tree because Store<AppState> is not Send-safe.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state
    pub state: Store<AppState>,
    pub endpoints: EndpointConfig,
    api: HttpCatalogApi,
}

impl AppService {
    /// Fresh state with the demo catalog and its first track preselected
    pub fn new(endpoints: EndpointConfig) -> Self {
        Self {
            state: Store::new(AppState::with_catalog(demo_catalog())),
            endpoints,
            api: HttpCatalogApi::new(),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn set_query(&self, query: String) {
        self.state.catalog().query().set(query);
    }

    pub fn set_genre_filter(&self, filter: GenreFilter) {
        self.state.catalog().genre_filter().set(filter);
    }

    pub fn set_tab(&self, tab: CatalogTab) {
        self.state.catalog().tab().set(tab);
    }

    /// Reload tracks from the tracks function (at mount and after seed/upload)
    pub fn refresh_catalog(&self) {
        let mut host = StoreCatalogHost { state: self.state };
        let api = self.api.clone();
        let url = self.endpoints.tracks_url.clone();

        spawn(async move {
            actions::refresh_catalog(&api, &url, &mut host).await;
        });
    }

    pub fn dismiss_catalog_error(&self) {
        self.state.catalog().error().set(None);
    }

    // =========================================================================
    // Playback
    // =========================================================================

    pub fn play_track(&self, track: Track) {
        debug!("Selected track {}", track.id);
        self.state
            .playback()
            .selection()
            .with_mut(|selection| selection.select_track(track));
    }

    pub fn toggle_play(&self) {
        self.state
            .playback()
            .selection()
            .with_mut(PlaybackSelection::toggle_play);
    }

    pub fn set_volume(&self, level: u8) {
        self.state
            .playback()
            .selection()
            .with_mut(|selection| selection.set_volume(level));
    }

    // =========================================================================
    // Remote action widgets
    // =========================================================================

    /// Seed the remote catalog; `on_complete` fires once on success
    pub fn seed_catalog(&self, on_complete: EventHandler<()>) {
        let mut host = StoreSeedHost {
            state: self.state,
            on_complete,
        };
        let api = self.api.clone();
        let url = self.endpoints.seed_url.clone();

        spawn(async move {
            actions::seed_catalog(&api, &url, &mut host).await;
        });
    }

    /// Submit the upload form; `on_track_uploaded` fires once on success
    pub fn upload_track(&self, on_track_uploaded: EventHandler<()>) {
        let mut host = StoreUploadHost {
            state: self.state,
            on_complete: on_track_uploaded,
        };
        let api = self.api.clone();
        let url = self.endpoints.tracks_url.clone();

        spawn(async move {
            actions::upload_track(&api, &url, &mut host).await;
        });
    }

    pub fn set_upload_open(&self, open: bool) {
        self.state.upload().open().set(open);
    }

    pub fn update_upload_form(&self, form: UploadForm) {
        self.state.upload().form().set(form);
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn dismiss_toast(&self, id: u64) {
        self.state.toasts().with_mut(|toasts| toasts.dismiss(id));
    }
}

pub fn use_app() -> AppService {
    use_context::<AppService>()
}

fn push_toast(state: Store<AppState>, notification: Notification) {
    state.toasts().with_mut(|toasts| {
        toasts.push(notification);
    });
}

struct StoreSeedHost {
    state: Store<AppState>,
    on_complete: EventHandler<()>,
}

impl ActionHost for StoreSeedHost {
    fn set_loading(&mut self, loading: bool) {
        self.state.seed().loading().set(loading);
    }

    fn notify(&mut self, notification: Notification) {
        push_toast(self.state, notification);
    }

    fn complete(&mut self) {
        self.on_complete.call(());
    }
}

struct StoreUploadHost {
    state: Store<AppState>,
    on_complete: EventHandler<()>,
}

impl ActionHost for StoreUploadHost {
    fn set_loading(&mut self, loading: bool) {
        self.state.upload().loading().set(loading);
    }

    fn notify(&mut self, notification: Notification) {
        push_toast(self.state, notification);
    }

    fn complete(&mut self) {
        self.on_complete.call(());
    }
}

impl UploadHost for StoreUploadHost {
    fn form(&self) -> UploadForm {
        self.state.upload().form().read().clone()
    }

    fn reset_form(&mut self) {
        self.state.upload().form().with_mut(UploadForm::reset);
    }

    fn close_dialog(&mut self) {
        self.state.upload().open().set(false);
    }
}

struct StoreCatalogHost {
    state: Store<AppState>,
}

impl RefreshHost for StoreCatalogHost {
    fn begin_refresh(&mut self) -> u64 {
        self.state.catalog().with_mut(CatalogState::begin_refresh)
    }

    fn is_latest_refresh(&self, generation: u64) -> bool {
        self.state.catalog().read().is_latest_refresh(generation)
    }

    fn end_refresh(&mut self) {
        self.state.catalog().refreshing().set(false);
    }

    fn replace_tracks(&mut self, tracks: Vec<Track>) {
        self.state.catalog().tracks().set(tracks);
    }

    fn set_error(&mut self, error: Option<String>) {
        self.state.catalog().error().set(error);
    }
}
