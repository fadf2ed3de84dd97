//! Track row component - displays a single catalog track
//!
//! The play button always selects: clicking it on the track that is already
//! playing keeps it playing.

use crate::components::icons::{DownloadIcon, HeartIcon, PlayIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Track;
use dioxus::prelude::*;
use neon_common::format_number;

#[component]
pub fn TrackRow(
    track: Track,
    /// Whether this row is the selected track and marked playing
    is_active: bool,
    on_play: EventHandler<Track>,
) -> Element {
    let plays = format_number(track.plays);
    let likes = format_number(track.likes);

    let row_class = if is_active {
        "bg-card border border-primary shadow-lg shadow-primary/20 rounded-lg p-4 animate-slide-up"
    } else {
        "bg-card border border-primary/30 hover:border-primary transition-all hover:shadow-lg hover:shadow-primary/20 rounded-lg p-4 animate-slide-up"
    };

    rsx! {
        div { class: "{row_class}", "data-testid": "track-row",
            div { class: "flex items-center gap-4",
                img {
                    src: "{track.cover_url}",
                    alt: "{track.title}",
                    class: "w-16 h-16 rounded object-cover border-2 border-primary/50",
                }
                div { class: "flex-1 min-w-0",
                    h3 { class: "font-orbitron font-semibold text-lg text-primary truncate",
                        "{track.title}"
                    }
                    p { class: "text-muted-foreground truncate", "{track.artist}" }
                    div { class: "flex gap-3 mt-1 items-center",
                        span { class: "text-xs px-2 py-0.5 rounded-full border border-accent text-accent",
                            "{track.genre}"
                        }
                        span { class: "text-sm text-muted-foreground flex items-center gap-1",
                            PlayIcon { class: "w-3.5 h-3.5" }
                            "{plays}"
                        }
                        span { class: "text-sm text-muted-foreground flex items-center gap-1",
                            HeartIcon { class: "w-3.5 h-3.5" }
                            "{likes}"
                        }
                    }
                }
                span { class: "text-muted-foreground font-mono", "{track.duration}" }
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Icon,
                        aria_label: Some(format!("Play {}", track.title)),
                        class: Some("hover:bg-primary hover:text-primary-foreground neon-border".to_string()),
                        onclick: {
                            let track = track.clone();
                            move |_| on_play.call(track.clone())
                        },
                        PlayIcon { class: "w-5 h-5" }
                    }
                    // Download and like are not wired to anything yet
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Icon,
                        aria_label: Some("Download".to_string()),
                        class: Some("hover:bg-secondary hover:text-secondary-foreground".to_string()),
                        onclick: |_| {},
                        DownloadIcon { class: "w-5 h-5" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Icon,
                        aria_label: Some("Like".to_string()),
                        class: Some("hover:bg-accent hover:text-accent-foreground".to_string()),
                        onclick: |_| {},
                        HeartIcon { class: "w-5 h-5" }
                    }
                }
            }
        }
    }
}
