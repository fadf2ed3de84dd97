//! Reusable text input component

use dioxus::prelude::*;

/// Reusable text input with the catalog's card styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    /// Leaves room on the left for an inline icon
    #[props(default)]
    with_leading_icon: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    let base = "w-full rounded-md bg-card border border-primary/30 focus:border-primary focus:outline-none py-2 pr-3 text-foreground placeholder-muted-foreground";
    let left_padding = if with_leading_icon { "pl-10" } else { "pl-3" };
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        input {
            r#type: "text",
            class: "{base} {left_padding} {disabled_class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}
