//! One-shot "load popular tracks" button

use crate::components::icons::{DatabaseIcon, LoaderIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Disabled with a spinner while the seed request is in flight
#[component]
pub fn SeedButtonView(loading: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Accent,
            size: ButtonSize::Medium,
            disabled: loading,
            onclick: move |_| on_click.call(()),
            if loading {
                LoaderIcon { class: "w-5 h-5 animate-spin" }
                "Loading..."
            } else {
                DatabaseIcon { class: "w-5 h-5" }
                "Load popular tracks"
            }
        }
    }
}
