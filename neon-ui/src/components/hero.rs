//! Hero banner at the top of the catalog page

use dioxus::prelude::*;

/// Banner with a headline and a slot for the remote action widgets
#[component]
pub fn HeroView(actions: Element) -> Element {
    rsx! {
        section { class: "mb-12",
            div { class: "relative overflow-hidden rounded-lg neon-border p-8 bg-gradient-to-br from-primary/10 via-secondary/10 to-accent/10",
                div { class: "relative z-10",
                    h2 { class: "text-5xl font-orbitron font-black mb-4 neon-glow", "Music of the future" }
                    p { class: "text-xl text-muted-foreground mb-6 max-w-2xl",
                        "Listen, download and publish tracks in cyberspace"
                    }
                    div { class: "flex gap-4 flex-wrap", {actions} }
                }
                div { class: "absolute top-0 right-0 w-64 h-64 bg-primary/20 rounded-full blur-3xl animate-pulse-neon" }
                div {
                    class: "absolute bottom-0 left-0 w-64 h-64 bg-secondary/20 rounded-full blur-3xl animate-pulse-neon",
                    style: "animation-delay: 1s",
                }
            }
        }
    }
}
