//! Toast stack for the notification side channel
//!
//! Each toast dismisses itself after `TOAST_TIMEOUT_MS`.

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::stores::{Toast, TOAST_TIMEOUT_MS};
use dioxus::prelude::*;
use tracing::debug;

/// Renders queued toasts bottom-right, newest last
#[component]
pub fn ToastStackView(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed bottom-28 right-4 z-[4000] flex flex-col gap-2 max-w-md",
            for toast in toasts {
                ToastView {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss,
                }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let palette = if toast.notification.is_destructive() {
        "bg-red-600 text-white"
    } else {
        "bg-card border border-primary text-foreground"
    };
    let id = toast.id;

    // Dropped with the component, so a manual dismiss cancels the timer
    use_hook(move || {
        spawn(async move {
            sleep_ms(TOAST_TIMEOUT_MS).await;
            debug!("Toast {id} timed out");
            on_dismiss.call(id);
        })
    });

    rsx! {
        div {
            class: "{palette} px-4 py-3 rounded-lg shadow-lg flex items-start gap-3",
            role: "status",
            div { class: "flex-1",
                p { class: "font-medium", "{toast.notification.title}" }
                p { class: "text-sm opacity-90", "{toast.notification.description}" }
            }
            ChromelessButton {
                class: Some("opacity-70 hover:opacity-100".to_string()),
                aria_label: Some("Dismiss".to_string()),
                onclick: move |_| on_dismiss.call(id),
                XIcon { class: "w-4 h-4" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
