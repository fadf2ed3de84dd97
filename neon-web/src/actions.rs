//! Seed, upload and refresh logic behind the catalog widgets
//!
//! Each action runs against a `CatalogApi` and a host trait, so the state
//! transitions are testable without a browser. `AppService` provides the
//! store-backed hosts.

use crate::api::{ApiError, CatalogApi};
use neon_common::{Track, UploadForm};
use neon_ui::display_types::Notification;
use serde_json::Value;
use tracing::{debug, info, warn};

pub const FILL_REQUIRED_FIELDS: &str = "Fill in all required fields";
pub const SEED_FAILED: &str = "Failed to seed tracks";
pub const UPLOAD_FAILED: &str = "Failed to upload track";
pub const UPLOAD_SUCCEEDED: &str = "Track uploaded successfully";
pub const REQUEST_FAILED: &str = "Something went wrong while loading";

/// State a remote action widget exposes to its action
pub trait ActionHost {
    fn set_loading(&mut self, loading: bool);
    fn notify(&mut self, notification: Notification);
    /// Invoked once after a 2xx response, never otherwise
    fn complete(&mut self);
}

/// Upload additionally owns its form and dialog
pub trait UploadHost: ActionHost {
    fn form(&self) -> UploadForm;
    fn reset_form(&mut self);
    fn close_dialog(&mut self);
}

/// Where a catalog refresh lands
///
/// Refreshes may overlap (mount, retry, after a seed or upload). Each one is
/// stamped by `begin_refresh`, and only the newest may write its outcome.
pub trait RefreshHost {
    /// Mark a refresh in flight and return its generation
    fn begin_refresh(&mut self) -> u64;
    fn is_latest_refresh(&self, generation: u64) -> bool;
    fn end_refresh(&mut self);
    fn replace_tracks(&mut self, tracks: Vec<Track>);
    fn set_error(&mut self, error: Option<String>);
}

/// POST an empty body to the seed function.
pub async fn seed_catalog(api: &impl CatalogApi, url: &str, host: &mut impl ActionHost) {
    host.set_loading(true);

    match api.post_json(url, None).await {
        Ok(response) if response.is_success() => {
            let count = response
                .body
                .get("count")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            info!("Seeded {count} tracks");
            host.notify(Notification::success(format!("Added {count} tracks")));
            host.complete();
        }
        Ok(response) => {
            warn!("Seed rejected with status {}", response.status);
            host.notify(Notification::error(
                response.error_message().unwrap_or(SEED_FAILED),
            ));
        }
        Err(e) => {
            warn!("Seed request failed: {e}");
            host.notify(Notification::error(REQUEST_FAILED));
        }
    }

    host.set_loading(false);
}

/// Validate the form locally, then POST it as JSON.
///
/// An invalid form never reaches the network and leaves `loading` untouched.
/// On rejection the form and dialog stay as they are so the user can retry.
pub async fn upload_track(api: &impl CatalogApi, url: &str, host: &mut impl UploadHost) {
    let form = host.form();
    if let Err(e) = form.validate() {
        debug!("Upload not sent: {e}");
        host.notify(Notification::error(FILL_REQUIRED_FIELDS));
        return;
    }

    host.set_loading(true);

    let result = match serde_json::to_value(&form) {
        Ok(body) => api.post_json(url, Some(body)).await,
        Err(e) => Err(ApiError::Parse(e.to_string())),
    };

    match result {
        Ok(response) if response.is_success() => {
            info!("Uploaded \"{}\" by {}", form.title, form.artist);
            host.notify(Notification::success(UPLOAD_SUCCEEDED));
            host.reset_form();
            host.close_dialog();
            host.complete();
        }
        Ok(response) => {
            warn!("Upload rejected with status {}", response.status);
            host.notify(Notification::error(
                response.error_message().unwrap_or(UPLOAD_FAILED),
            ));
        }
        Err(e) => {
            warn!("Upload request failed: {e}");
            host.notify(Notification::error(REQUEST_FAILED));
        }
    }

    host.set_loading(false);
}

/// Reload the in-memory catalog from the tracks function.
///
/// An empty remote list keeps the current catalog. On failure the current
/// catalog is kept and the error is reported to the host. A result that
/// arrives after a newer refresh has started is dropped.
pub async fn refresh_catalog(api: &impl CatalogApi, url: &str, host: &mut impl RefreshHost) {
    let generation = host.begin_refresh();
    let result = api.fetch_tracks(url).await;

    if !host.is_latest_refresh(generation) {
        debug!("Dropping result of superseded catalog refresh {generation}");
        return;
    }

    match result {
        Ok(tracks) if tracks.is_empty() => {
            debug!("Tracks function returned no tracks, keeping current catalog");
            host.set_error(None);
        }
        Ok(tracks) => {
            info!("Loaded {} tracks", tracks.len());
            host.replace_tracks(tracks);
            host.set_error(None);
        }
        Err(e) => {
            warn!("Catalog refresh failed: {e}");
            host.set_error(Some(e.to_string()));
        }
    }

    host.end_refresh();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EndpointResponse;
    use async_trait::async_trait;
    use neon_common::Genre;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;

    const URL: &str = "https://functions.example.com/catalog";

    struct MockApi {
        post_result: Result<EndpointResponse, ApiError>,
        fetch_result: Result<Vec<Track>, ApiError>,
        posts: RefCell<Vec<(String, Option<Value>)>>,
    }

    impl MockApi {
        fn responding(status: u16, body: Value) -> Self {
            Self::with_post(Ok(EndpointResponse { status, body }))
        }

        fn with_post(post_result: Result<EndpointResponse, ApiError>) -> Self {
            Self {
                post_result,
                fetch_result: Ok(vec![]),
                posts: RefCell::new(vec![]),
            }
        }

        fn with_fetch(fetch_result: Result<Vec<Track>, ApiError>) -> Self {
            Self {
                fetch_result,
                ..Self::responding(200, json!({}))
            }
        }

        fn post_count(&self) -> usize {
            self.posts.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for MockApi {
        async fn post_json(
            &self,
            url: &str,
            body: Option<Value>,
        ) -> Result<EndpointResponse, ApiError> {
            self.posts.borrow_mut().push((url.to_string(), body));
            self.post_result.clone()
        }

        async fn fetch_tracks(&self, _url: &str) -> Result<Vec<Track>, ApiError> {
            self.fetch_result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        loading_changes: Vec<bool>,
        notifications: Vec<Notification>,
        completions: u32,
        form: UploadForm,
        dialog_open: bool,
    }

    impl RecordingHost {
        fn with_form(form: UploadForm) -> Self {
            Self {
                form,
                dialog_open: true,
                ..Default::default()
            }
        }

        fn loading(&self) -> bool {
            self.loading_changes.last().copied().unwrap_or(false)
        }

        fn last_notification(&self) -> &Notification {
            self.notifications.last().unwrap()
        }
    }

    impl ActionHost for RecordingHost {
        fn set_loading(&mut self, loading: bool) {
            self.loading_changes.push(loading);
        }

        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }

        fn complete(&mut self) {
            self.completions += 1;
        }
    }

    impl UploadHost for RecordingHost {
        fn form(&self) -> UploadForm {
            self.form.clone()
        }

        fn reset_form(&mut self) {
            self.form.reset();
        }

        fn close_dialog(&mut self) {
            self.dialog_open = false;
        }
    }

    fn filled_form() -> UploadForm {
        UploadForm {
            title: "Neon Dreams".to_string(),
            artist: "CyberSynth".to_string(),
            genre: Genre::Cyberpunk,
            duration: "3:45".to_string(),
            audio_url: "https://cdn.example.com/neon.mp3".to_string(),
            cover_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_seed_success_reports_count_and_completes_once() {
        let api = MockApi::responding(200, json!({"count": 12, "message": "ok"}));
        let mut host = RecordingHost::default();

        seed_catalog(&api, URL, &mut host).await;

        assert_eq!(host.loading_changes, vec![true, false]);
        assert_eq!(host.completions, 1);
        assert_eq!(host.last_notification().description, "Added 12 tracks");
        assert!(!host.last_notification().is_destructive());

        let posts = api.posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], (URL.to_string(), None));
    }

    #[tokio::test]
    async fn test_seed_success_without_count_reports_zero() {
        let api = MockApi::responding(200, json!({"message": "ok"}));
        let mut host = RecordingHost::default();

        seed_catalog(&api, URL, &mut host).await;

        assert_eq!(host.last_notification().description, "Added 0 tracks");
        assert_eq!(host.completions, 1);
    }

    #[tokio::test]
    async fn test_seed_rejection_uses_server_error_or_fallback() {
        let api = MockApi::responding(500, json!({"error": "database unavailable"}));
        let mut host = RecordingHost::default();
        seed_catalog(&api, URL, &mut host).await;
        assert_eq!(host.last_notification().description, "database unavailable");
        assert!(host.last_notification().is_destructive());
        assert_eq!(host.completions, 0);
        assert!(!host.loading());

        let api = MockApi::responding(500, json!({"error": ""}));
        let mut host = RecordingHost::default();
        seed_catalog(&api, URL, &mut host).await;
        assert_eq!(host.last_notification().description, SEED_FAILED);
    }

    #[tokio::test]
    async fn test_seed_transport_failure() {
        let api = MockApi::with_post(Err(ApiError::Network("connection refused".to_string())));
        let mut host = RecordingHost::default();

        seed_catalog(&api, URL, &mut host).await;

        assert_eq!(host.last_notification().description, REQUEST_FAILED);
        assert_eq!(host.last_notification().title, "Error");
        assert_eq!(host.completions, 0);
        assert_eq!(host.loading_changes, vec![true, false]);
    }

    #[tokio::test]
    async fn test_upload_invalid_form_sends_nothing() {
        let clears: [fn(&mut UploadForm); 3] = [
            |f| f.title.clear(),
            |f| f.artist.clear(),
            |f| f.audio_url.clear(),
        ];
        for clear in clears {
            let mut form = filled_form();
            clear(&mut form);
            let api = MockApi::responding(201, json!({}));
            let mut host = RecordingHost::with_form(form);

            upload_track(&api, URL, &mut host).await;

            assert_eq!(api.post_count(), 0);
            assert!(host.loading_changes.is_empty());
            assert_eq!(host.last_notification().description, FILL_REQUIRED_FIELDS);
            assert!(host.last_notification().is_destructive());
            assert!(host.dialog_open);
        }
    }

    #[tokio::test]
    async fn test_upload_success_resets_and_closes() {
        let api = MockApi::responding(201, json!({"track": {}, "message": "ok"}));
        let mut host = RecordingHost::with_form(filled_form());

        upload_track(&api, URL, &mut host).await;

        assert_eq!(host.loading_changes, vec![true, false]);
        assert_eq!(host.completions, 1);
        assert_eq!(host.form, UploadForm::default());
        assert!(!host.dialog_open);
        assert_eq!(host.last_notification().title, "Success!");

        let posts = api.posts.borrow();
        let body = posts[0].1.as_ref().unwrap();
        assert_eq!(body["audioUrl"], "https://cdn.example.com/neon.mp3");
        assert_eq!(body["genre"], "Cyberpunk");
        assert_eq!(body["coverUrl"], "");
    }

    #[tokio::test]
    async fn test_upload_rejection_keeps_form_and_dialog() {
        let api = MockApi::responding(400, json!({"error": "duplicate"}));
        let mut host = RecordingHost::with_form(filled_form());

        upload_track(&api, URL, &mut host).await;

        assert!(!host.loading());
        assert_eq!(host.completions, 0);
        assert_eq!(host.form, filled_form());
        assert!(host.dialog_open);
        assert_eq!(host.last_notification().description, "duplicate");
        assert_eq!(api.post_count(), 1);
    }

    #[tokio::test]
    async fn test_upload_unparseable_body() {
        let api = MockApi::with_post(Err(ApiError::Parse("expected value".to_string())));
        let mut host = RecordingHost::with_form(filled_form());

        upload_track(&api, URL, &mut host).await;

        assert_eq!(host.last_notification().description, REQUEST_FAILED);
        assert!(host.dialog_open);
        assert!(!host.loading());
    }

    #[derive(Default)]
    struct RecordingCatalog {
        tracks: Vec<Track>,
        refreshing_changes: Vec<bool>,
        generation: u64,
        error: Option<String>,
    }

    impl RecordingCatalog {
        fn refreshing(&self) -> bool {
            self.refreshing_changes.last().copied().unwrap_or(false)
        }

        fn ids(&self) -> Vec<i64> {
            self.tracks.iter().map(|t| t.id).collect()
        }
    }

    impl RefreshHost for RecordingCatalog {
        fn begin_refresh(&mut self) -> u64 {
            self.generation += 1;
            self.refreshing_changes.push(true);
            self.generation
        }

        fn is_latest_refresh(&self, generation: u64) -> bool {
            self.generation == generation
        }

        fn end_refresh(&mut self) {
            self.refreshing_changes.push(false);
        }

        fn replace_tracks(&mut self, tracks: Vec<Track>) {
            self.tracks = tracks;
        }

        fn set_error(&mut self, error: Option<String>) {
            self.error = error;
        }
    }

    /// One catalog shared by concurrently running refreshes
    #[derive(Clone, Default)]
    struct SharedCatalog(Rc<RefCell<RecordingCatalog>>);

    impl RefreshHost for SharedCatalog {
        fn begin_refresh(&mut self) -> u64 {
            self.0.borrow_mut().begin_refresh()
        }

        fn is_latest_refresh(&self, generation: u64) -> bool {
            self.0.borrow().is_latest_refresh(generation)
        }

        fn end_refresh(&mut self) {
            self.0.borrow_mut().end_refresh();
        }

        fn replace_tracks(&mut self, tracks: Vec<Track>) {
            self.0.borrow_mut().replace_tracks(tracks);
        }

        fn set_error(&mut self, error: Option<String>) {
            self.0.borrow_mut().set_error(error);
        }
    }

    /// Answers each fetch after its own delay, in call order
    struct SlowTracksApi {
        answers: RefCell<VecDeque<(u64, Result<Vec<Track>, ApiError>)>>,
    }

    #[async_trait(?Send)]
    impl CatalogApi for SlowTracksApi {
        async fn post_json(
            &self,
            _url: &str,
            _body: Option<Value>,
        ) -> Result<EndpointResponse, ApiError> {
            Err(ApiError::Network("not scripted".to_string()))
        }

        async fn fetch_tracks(&self, _url: &str) -> Result<Vec<Track>, ApiError> {
            let (delay_ms, result) = self
                .answers
                .borrow_mut()
                .pop_front()
                .unwrap_or((0, Ok(vec![])));
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            result
        }
    }

    fn track(id: i64) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            artist: "Pulse Wave".to_string(),
            duration: "3:28".to_string(),
            genre: Genre::Cyberpunk,
            plays: 0,
            likes: 0,
            cover_url: String::new(),
            audio_url: None,
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_tracks_and_clears_error() {
        let api = MockApi::with_fetch(Ok(vec![track(10), track(11)]));
        let mut catalog = RecordingCatalog {
            tracks: vec![track(1)],
            error: Some("stale".to_string()),
            ..Default::default()
        };

        refresh_catalog(&api, URL, &mut catalog).await;

        assert_eq!(catalog.ids(), vec![10, 11]);
        assert_eq!(catalog.error, None);
        assert_eq!(catalog.refreshing_changes, vec![true, false]);
    }

    #[tokio::test]
    async fn test_refresh_keeps_catalog_on_empty_or_failure() {
        let api = MockApi::with_fetch(Ok(vec![]));
        let mut catalog = RecordingCatalog {
            tracks: vec![track(1)],
            ..Default::default()
        };
        refresh_catalog(&api, URL, &mut catalog).await;
        assert_eq!(catalog.tracks.len(), 1);

        let api = MockApi::with_fetch(Err(ApiError::Network("offline".to_string())));
        refresh_catalog(&api, URL, &mut catalog).await;
        assert_eq!(catalog.tracks.len(), 1);
        assert_eq!(catalog.error.as_deref(), Some("Network error: offline"));
        assert_eq!(catalog.refreshing_changes, vec![true, false, true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_older_refresh_finishing_last_is_dropped() {
        let api = SlowTracksApi {
            answers: RefCell::new(VecDeque::from([
                (300, Ok(vec![track(1)])),
                (100, Ok(vec![track(10), track(11)])),
            ])),
        };
        let catalog = SharedCatalog::default();

        let older = {
            let mut host = catalog.clone();
            let api = &api;
            async move { refresh_catalog(api, URL, &mut host).await }
        };
        let newer = {
            let mut host = catalog.clone();
            let api = &api;
            let catalog = catalog.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                refresh_catalog(api, URL, &mut host).await;
                // The older request is still outstanding but no longer counts
                assert!(!catalog.0.borrow().refreshing());
                assert_eq!(catalog.0.borrow().ids(), vec![10, 11]);
            }
        };
        tokio::join!(older, newer);

        let state = catalog.0.borrow();
        assert_eq!(state.ids(), vec![10, 11]);
        assert!(!state.refreshing());
        assert_eq!(state.refreshing_changes, vec![true, true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_failure_leaves_no_error() {
        let api = SlowTracksApi {
            answers: RefCell::new(VecDeque::from([
                (300, Err(ApiError::Network("timed out".to_string()))),
                (100, Ok(vec![track(10)])),
            ])),
        };
        let catalog = SharedCatalog::default();

        let mut first = catalog.clone();
        let mut second = catalog.clone();
        tokio::join!(refresh_catalog(&api, URL, &mut first), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            refresh_catalog(&api, URL, &mut second).await;
        });

        let state = catalog.0.borrow();
        assert_eq!(state.error, None);
        assert_eq!(state.ids(), vec![10]);
    }
}
