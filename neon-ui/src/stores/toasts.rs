//! Toast notification queue

use crate::display_types::Notification;
use dioxus::prelude::*;

/// How long a toast stays up before it is dismissed automatically
pub const TOAST_TIMEOUT_MS: u64 = 5000;

/// A queued notification with a stable id for dismissal
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    /// Queue a notification, returning its id
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Remove a toast; unknown ids are ignored (it may already be gone)
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
