//! Artist card component - pure view, no behavior beyond display

use crate::components::icons::{MusicIcon, UserPlusIcon, UsersIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Artist;
use dioxus::prelude::*;

#[component]
pub fn ArtistCard(artist: Artist) -> Element {
    let initial = artist.initial();
    let mut avatar_failed = use_signal(|| false);

    rsx! {
        div {
            class: "bg-card border border-primary/30 rounded-lg p-6 text-center hover:border-primary transition-all hover:shadow-lg hover:shadow-primary/20 animate-slide-up",
            "data-testid": "artist-card",
            div { class: "w-24 h-24 mx-auto mb-4 rounded-full border-2 border-primary overflow-hidden flex items-center justify-center bg-muted",
                if avatar_failed() {
                    span { class: "text-3xl font-orbitron text-primary", "{initial}" }
                } else {
                    img {
                        src: "{artist.avatar_url}",
                        alt: "{artist.name}",
                        class: "w-full h-full object-cover",
                        onerror: move |_| avatar_failed.set(true),
                    }
                }
            }
            h3 { class: "font-orbitron font-semibold text-xl text-primary mb-2", "{artist.name}" }
            div { class: "flex justify-center gap-4 text-sm text-muted-foreground mb-4",
                span { class: "flex items-center gap-1",
                    UsersIcon { class: "w-3.5 h-3.5" }
                    "{artist.followers}"
                }
                span { class: "flex items-center gap-1",
                    MusicIcon { class: "w-3.5 h-3.5" }
                    "{artist.tracks}"
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                class: Some("w-full".to_string()),
                onclick: |_| {},
                UserPlusIcon { class: "w-4 h-4" }
                "Follow"
            }
        }
    }
}
