//! Empty-state panel for the playlists tab (presentational)

use crate::components::icons::{ListMusicIcon, PlusIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn PlaylistsPanel() -> Element {
    rsx! {
        div { class: "bg-card border border-primary/30 rounded-lg p-8 text-center",
            div { class: "text-primary mb-4 flex justify-center",
                ListMusicIcon { class: "w-16 h-16" }
            }
            h3 { class: "font-orbitron text-2xl font-bold mb-2", "Playlists are coming soon" }
            p { class: "text-muted-foreground mb-6", "Build collections of your favourite tracks" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Medium,
                onclick: |_| {},
                PlusIcon { class: "w-5 h-5" }
                "Create playlist"
            }
        }
    }
}
