//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for icon buttons.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled cyan - primary actions, selected chips
    Primary,
    /// Magenta outline - upload
    Secondary,
    /// Accent outline - seed
    Accent,
    /// Dim outline - unselected chips, row actions
    Outline,
    /// No background - nav and decorative controls
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
    /// Square, sized by its icon
    Icon,
}

pub(crate) fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let base = "inline-flex items-center justify-center gap-2 rounded-md font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
        ButtonSize::Icon => "w-10 h-10",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-primary text-primary-foreground hover:bg-primary/90 neon-border",
        ButtonVariant::Secondary => {
            "border border-secondary text-secondary hover:bg-secondary/10 neon-border-magenta"
        }
        ButtonVariant::Accent => "border border-accent text-accent hover:bg-accent/10",
        ButtonVariant::Outline => "border border-primary/30 text-foreground hover:border-primary",
        ButtonVariant::Ghost => "text-foreground hover:text-primary",
    };

    format!("{base} {padding} {variant_class}")
}

fn merge_class(base: String, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{base} {extra}"),
        None => base,
    }
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = merge_class(button_class(variant, size), class.as_deref());

    rsx! {
        ChromelessButton {
            disabled,
            r#type,
            aria_label,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
