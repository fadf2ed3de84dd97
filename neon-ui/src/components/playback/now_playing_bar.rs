//! Now Playing Bar view component
//!
//! Pure, props-based component for displaying the current selection. Nothing
//! here produces sound; the volume slider and play flag are UI state only.

use crate::components::icons::{
    HeartIcon, ListMusicIcon, PauseIcon, PlayIcon, RepeatIcon, ShuffleIcon, SkipBackIcon,
    SkipForwardIcon, VolumeIcon,
};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Track;
use dioxus::prelude::*;

/// Now playing bar view (pure, props-based)
#[component]
pub fn NowPlayingBarView(
    track: Option<Track>,
    is_playing: bool,
    volume: u8,
    on_toggle_play: EventHandler<()>,
    on_volume_change: EventHandler<u8>,
) -> Element {
    rsx! {
        div { class: "fixed bottom-0 left-0 right-0 bg-card/95 backdrop-blur-lg border-t border-primary/30 z-50",
            div { class: "container mx-auto px-4 py-4",
                div { class: "flex items-center gap-6",
                    TrackInfoView { track }
                    PlaybackControlsView { is_playing, on_toggle_play }
                    VolumeView { volume, on_volume_change }
                }
            }
        }
    }
}

#[component]
fn TrackInfoView(track: Option<Track>) -> Element {
    let Some(track) = track else {
        return rsx! {
            div { class: "flex-1 text-muted-foreground", "Nothing selected" }
        };
    };

    rsx! {
        div { class: "flex items-center gap-4 flex-1 min-w-0",
            img {
                src: "{track.cover_url}",
                alt: "{track.title}",
                class: "w-14 h-14 rounded object-cover border-2 border-primary neon-border",
            }
            div { class: "min-w-0",
                h4 { class: "font-orbitron font-semibold text-primary truncate", "{track.title}" }
                p { class: "text-sm text-muted-foreground truncate", "{track.artist}" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                aria_label: Some("Like".to_string()),
                onclick: |_| {},
                HeartIcon { class: "w-5 h-5" }
            }
        }
    }
}

#[component]
fn PlaybackControlsView(is_playing: bool, on_toggle_play: EventHandler<()>) -> Element {
    let toggle_label = if is_playing { "Pause" } else { "Play" };

    rsx! {
        div { class: "flex flex-col items-center gap-2 flex-1",
            div { class: "flex items-center gap-4",
                // Shuffle, skip and repeat are placeholders with no behavior
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: Some("Shuffle".to_string()),
                    onclick: |_| {},
                    ShuffleIcon { class: "w-5 h-5" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: Some("Previous".to_string()),
                    onclick: |_| {},
                    SkipBackIcon { class: "w-5 h-5" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Icon,
                    class: Some("w-12 h-12 rounded-full".to_string()),
                    aria_label: Some(toggle_label.to_string()),
                    onclick: move |_| on_toggle_play.call(()),
                    if is_playing {
                        PauseIcon { class: "w-6 h-6" }
                    } else {
                        PlayIcon { class: "w-6 h-6" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: Some("Next".to_string()),
                    onclick: |_| {},
                    SkipForwardIcon { class: "w-5 h-5" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: Some("Repeat".to_string()),
                    onclick: |_| {},
                    RepeatIcon { class: "w-5 h-5" }
                }
            }
            div { class: "w-full max-w-md h-1 bg-muted rounded-full overflow-hidden",
                div { class: "h-full w-1/3 bg-gradient-to-r from-primary to-secondary" }
            }
        }
    }
}

#[component]
fn VolumeView(volume: u8, on_volume_change: EventHandler<u8>) -> Element {
    rsx! {
        div { class: "flex items-center gap-3 flex-1 justify-end",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                aria_label: Some("Queue".to_string()),
                onclick: |_| {},
                ListMusicIcon { class: "w-5 h-5" }
            }
            VolumeIcon { class: "w-5 h-5 text-muted-foreground" }
            input {
                r#type: "range",
                class: "w-24 accent-primary",
                aria_label: "Volume",
                min: "0",
                max: "100",
                step: "1",
                value: "{volume}",
                oninput: move |e| {
                    if let Ok(level) = e.value().parse::<f64>() {
                        on_volume_change.call(level.round().clamp(0.0, 100.0) as u8);
                    }
                },
            }
        }
    }
}
