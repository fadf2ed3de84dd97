use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use neon_ui::stores::{AppStateStoreExt, PlaybackUiStateStoreExt, ToastStateStoreExt};
use neon_ui::{default_nav_items, AppLayoutView, HeaderView, NowPlayingBarView, ToastStackView};
use tracing::debug;

/// Page chrome shared by every route: header, now-playing bar and toasts
#[component]
pub fn AppLayout() -> Element {
    let app = use_app();
    let state = app.state;

    let selection = state.playback().selection().read().clone();
    let toasts = state.toasts().toasts().read().clone();

    let on_toggle_play = {
        let app = app.clone();
        move |_| app.toggle_play()
    };
    let on_volume_change = {
        let app = app.clone();
        move |level: u8| app.set_volume(level)
    };
    let on_dismiss = move |id: u64| app.dismiss_toast(id);

    rsx! {
        AppLayoutView {
            header: rsx! {
                HeaderView {
                    nav_items: default_nav_items(),
                    on_nav_click: move |id: String| {
                        debug!("Nav item {id} clicked");
                        if id == "catalog" {
                            navigator().push(Route::Catalog {});
                        }
                    },
                }
            },
            playback_bar: rsx! {
                if let Some(track) = selection.current().cloned() {
                    NowPlayingBarView {
                        track: Some(track),
                        is_playing: selection.is_playing(),
                        volume: selection.volume().level(),
                        on_toggle_play,
                        on_volume_change,
                    }
                }
            },
            extra: rsx! {
                ToastStackView { toasts, on_dismiss }
            },
            Outlet::<Route> {}
        }
    }
}
