//! Banner shown when the tracks function could not be reached.
//!
//! The catalog below it keeps showing whatever was loaded last.

use crate::components::icons::{AlertTriangleIcon, LoaderIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(
    /// Error text from the failed refresh
    detail: String,
    /// A retry is in flight
    refreshing: bool,
    on_retry: EventHandler<()>,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-4 rounded-lg border border-secondary/50 bg-secondary/10 px-4 py-3 mb-6",
            role: "alert",
            AlertTriangleIcon { class: "w-5 h-5 text-secondary shrink-0" }
            div { class: "flex-1 min-w-0",
                p { class: "font-orbitron text-sm text-secondary", "Showing saved tracks" }
                p { class: "text-sm text-muted-foreground truncate", title: "{detail}",
                    "The live catalog is unavailable: {detail}"
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: refreshing,
                onclick: move |_| on_retry.call(()),
                if refreshing {
                    LoaderIcon { class: "w-4 h-4 animate-spin" }
                }
                "Retry"
            }
            ChromelessButton {
                class: Some("text-muted-foreground hover:text-foreground".to_string()),
                aria_label: Some("Dismiss".to_string()),
                onclick: move |_| on_dismiss.call(()),
                XIcon { class: "w-4 h-4" }
            }
        }
    }
}
