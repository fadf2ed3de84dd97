//! Dialog overlay view component
//!
//! Pure, props-based modal: a dimmed backdrop that closes on click, and a card
//! that swallows clicks so content interaction never closes it.

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;

#[component]
pub fn DialogView(
    is_open: bool,
    title: String,
    #[props(default)] description: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/70 flex items-center justify-center z-[3000]",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "bg-card border border-primary/30 rounded-lg p-6 w-full sm:max-w-[500px] mx-4 relative",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),

                ChromelessButton {
                    class: Some("absolute top-4 right-4 text-muted-foreground hover:text-foreground".to_string()),
                    aria_label: Some("Close".to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-4 h-4" }
                }
                h2 { class: "font-orbitron text-2xl text-primary", "{title}" }
                if let Some(description) = description {
                    p { class: "text-muted-foreground mt-1", "{description}" }
                }
                div { class: "mt-4", {children} }
            }
        }
    }
}
