//! Genre chips - a group of toggle buttons where exactly one is selected

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::display_types::GenreFilter;
use dioxus::prelude::*;

#[component]
pub fn GenreFilterBar(
    chips: Vec<GenreFilter>,
    selected: GenreFilter,
    on_select: EventHandler<GenreFilter>,
) -> Element {
    rsx! {
        div { class: "flex gap-2 flex-wrap",
            for chip in chips {
                Button {
                    key: "{chip.label()}",
                    variant: if chip == selected { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    size: ButtonSize::Medium,
                    onclick: {
                        let chip = chip.clone();
                        move |_| on_select.call(chip.clone())
                    },
                    "{chip.label()}"
                }
            }
        }
    }
}
