//! Upload dialog view component
//!
//! Holds no state of its own: every keystroke hands an updated copy of the
//! form back through `on_form_change`.

use crate::components::icons::{LoaderIcon, UploadIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, DialogView, TextInput};
use crate::display_types::Genre;
use dioxus::prelude::*;
use neon_common::UploadForm;

#[component]
pub fn UploadTrackDialogView(
    open: bool,
    loading: bool,
    form: UploadForm,
    on_open: EventHandler<()>,
    on_close: EventHandler<()>,
    on_form_change: EventHandler<UploadForm>,
    on_submit: EventHandler<()>,
) -> Element {
    let selected_genre = form.genre.as_str().to_string();

    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            size: ButtonSize::Medium,
            onclick: move |_| on_open.call(()),
            UploadIcon { class: "w-5 h-5" }
            "Upload track"
        }

        DialogView {
            is_open: open,
            title: "Upload a track".to_string(),
            description: Some("Share your music with the community".to_string()),
            on_close,

            form {
                class: "space-y-4",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                FormField { label: "Title *", id: "upload-title",
                    TextInput {
                        id: Some("upload-title".to_string()),
                        value: form.title.clone(),
                        placeholder: "Track title",
                        disabled: loading,
                        autofocus: true,
                        on_input: {
                            let form = form.clone();
                            move |title: String| on_form_change.call(UploadForm { title, ..form.clone() })
                        },
                    }
                }
                FormField { label: "Artist *", id: "upload-artist",
                    TextInput {
                        id: Some("upload-artist".to_string()),
                        value: form.artist.clone(),
                        placeholder: "Artist name",
                        disabled: loading,
                        on_input: {
                            let form = form.clone();
                            move |artist: String| on_form_change.call(UploadForm { artist, ..form.clone() })
                        },
                    }
                }
                div { class: "grid grid-cols-2 gap-4",
                    FormField { label: "Genre", id: "upload-genre",
                        select {
                            id: "upload-genre",
                            class: "w-full rounded-md bg-card border border-primary/30 focus:border-primary focus:outline-none px-3 py-2 text-foreground",
                            disabled: loading,
                            value: "{selected_genre}",
                            onchange: {
                                let form = form.clone();
                                move |e: Event<FormData>| {
                                    on_form_change.call(UploadForm {
                                        genre: Genre::from(e.value()),
                                        ..form.clone()
                                    })
                                }
                            },
                            for genre in Genre::UPLOADABLE {
                                option {
                                    key: "{genre}",
                                    value: "{genre}",
                                    selected: genre.as_str() == selected_genre,
                                    "{genre}"
                                }
                            }
                        }
                    }
                    FormField { label: "Duration", id: "upload-duration",
                        TextInput {
                            id: Some("upload-duration".to_string()),
                            value: form.duration.clone(),
                            placeholder: "3:45",
                            disabled: loading,
                            on_input: {
                                let form = form.clone();
                                move |duration: String| on_form_change.call(UploadForm { duration, ..form.clone() })
                            },
                        }
                    }
                }
                FormField { label: "Audio URL *", id: "upload-audio-url",
                    TextInput {
                        id: Some("upload-audio-url".to_string()),
                        value: form.audio_url.clone(),
                        placeholder: "https://example.com/track.mp3",
                        disabled: loading,
                        on_input: {
                            let form = form.clone();
                            move |audio_url: String| on_form_change.call(UploadForm { audio_url, ..form.clone() })
                        },
                    }
                }
                FormField { label: "Cover URL", id: "upload-cover-url",
                    TextInput {
                        id: Some("upload-cover-url".to_string()),
                        value: form.cover_url.clone(),
                        placeholder: "https://example.com/cover.jpg",
                        disabled: loading,
                        on_input: {
                            let form = form.clone();
                            move |cover_url: String| on_form_change.call(UploadForm { cover_url, ..form.clone() })
                        },
                    }
                }

                // Submission goes through the form's onsubmit so Enter works too
                Button {
                    r#type: "submit",
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    class: Some("w-full".to_string()),
                    disabled: loading,
                    onclick: |_| {},
                    if loading {
                        LoaderIcon { class: "w-5 h-5 animate-spin" }
                        "Uploading..."
                    } else {
                        UploadIcon { class: "w-5 h-5" }
                        "Upload"
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(label: &'static str, id: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "space-y-1",
            label { r#for: id, class: "block text-sm font-medium text-muted-foreground", "{label}" }
            {children}
        }
    }
}
