use crate::app_service::use_app;
use dioxus::prelude::*;
use neon_common::UploadForm;
use neon_ui::display_types::{CatalogTab, GenreFilter, Track};
use neon_ui::stores::{
    AppStateStoreExt, CatalogStateStoreExt, PlaybackUiStateStoreExt, SeedStateStoreExt,
};
use neon_ui::{CatalogView, ErrorBanner, HeroView, SeedButtonView, UploadTrackDialogView};

/// Catalog page - wires the app store into the catalog, seed and upload views
#[component]
pub fn Catalog() -> Element {
    let app = use_app();
    let state = app.state;

    // One refresh at mount; the demo catalog stays until it succeeds
    use_hook({
        let app = app.clone();
        move || app.refresh_catalog()
    });

    // Completion of seed/upload reloads the in-memory catalog
    let on_catalog_changed = use_callback({
        let app = app.clone();
        move |_: ()| app.refresh_catalog()
    });

    let error = state.catalog().error().read().clone();
    let refreshing = *state.catalog().refreshing().read();
    let selection = state.playback().selection().read().clone();
    let seed_loading = *state.seed().loading().read();
    let upload = state.upload().read().clone();

    let actions = rsx! {
        SeedButtonView {
            loading: seed_loading,
            on_click: {
                let app = app.clone();
                move |_| app.seed_catalog(on_catalog_changed)
            },
        }
        UploadTrackDialogView {
            open: upload.open,
            loading: upload.loading,
            form: upload.form,
            on_open: {
                let app = app.clone();
                move |_| app.set_upload_open(true)
            },
            on_close: {
                let app = app.clone();
                move |_| app.set_upload_open(false)
            },
            on_form_change: {
                let app = app.clone();
                move |form: UploadForm| app.update_upload_form(form)
            },
            on_submit: {
                let app = app.clone();
                move |_| app.upload_track(on_catalog_changed)
            },
        }
    };

    rsx! {
        HeroView { actions }

        if let Some(detail) = error {
            ErrorBanner {
                detail,
                refreshing,
                on_retry: {
                    let app = app.clone();
                    move |_| app.refresh_catalog()
                },
                on_dismiss: {
                    let app = app.clone();
                    move |_| app.dismiss_catalog_error()
                },
            }
        }

        CatalogView {
            state: state.catalog(),
            selection,
            on_query_change: {
                let app = app.clone();
                move |query: String| app.set_query(query)
            },
            on_genre_select: {
                let app = app.clone();
                move |filter: GenreFilter| app.set_genre_filter(filter)
            },
            on_tab_change: {
                let app = app.clone();
                move |tab: CatalogTab| app.set_tab(tab)
            },
            on_play_track: {
                let app = app.clone();
                move |track: Track| app.play_track(track)
            },
        }
    }
}
