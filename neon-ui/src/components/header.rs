//! Header view component
//!
//! Sticky top bar with the logo and navigation. Navigation is a callback; the
//! catalog is a single page so most items are presentational.

use crate::components::icons::{HomeIcon, ListMusicIcon, MusicIcon, UploadIcon, UserIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::NavItem;
use dioxus::prelude::*;

/// Default navigation entries
pub fn default_nav_items() -> Vec<NavItem> {
    [
        ("home", "Home"),
        ("catalog", "Catalog"),
        ("playlists", "Playlists"),
        ("upload", "Upload"),
        ("profile", "Profile"),
    ]
    .into_iter()
    .map(|(id, label)| NavItem {
        id: id.to_string(),
        label: label.to_string(),
        is_active: id == "catalog",
    })
    .collect()
}

#[component]
pub fn HeaderView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        header { class: "border-b border-primary/30 sticky top-0 backdrop-blur-lg bg-background/80 z-50",
            div { class: "container mx-auto px-4 py-4 flex items-center justify-between",
                h1 { class: "text-3xl font-orbitron font-bold neon-glow",
                    "NEON"
                    span { class: "text-secondary neon-glow-magenta", "BEATS" }
                }
                nav { class: "flex gap-6",
                    for item in nav_items {
                        Button {
                            key: "{item.id}",
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Medium,
                            class: if item.is_active { Some("text-primary".to_string()) } else { None },
                            onclick: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            NavIcon { id: item.id.clone() }
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavIcon(id: String) -> Element {
    let class = "w-5 h-5";
    match id.as_str() {
        "home" => rsx! { HomeIcon { class } },
        "playlists" => rsx! { ListMusicIcon { class } },
        "upload" => rsx! { UploadIcon { class } },
        "profile" => rsx! { UserIcon { class } },
        _ => rsx! { MusicIcon { class } },
    }
}
