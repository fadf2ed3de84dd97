//! App layout view component
//!
//! Page structure with slots for the header, main content, the persistent
//! playback bar and overlays (dialogs, toasts).

use dioxus::prelude::*;

#[component]
pub fn AppLayoutView(
    /// Main content
    children: Element,
    #[props(default)] header: Option<Element>,
    /// Fixed to the bottom of the viewport
    #[props(default)]
    playback_bar: Option<Element>,
    /// Dialogs, toasts and other overlays
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-background text-foreground pb-32",
            if let Some(header) = header {
                {header}
            }
            main { class: "container mx-auto px-4 py-8", {children} }
            if let Some(pb) = playback_bar {
                {pb}
            }
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}
