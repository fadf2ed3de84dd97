//! State of the seed and upload widgets

use dioxus::prelude::*;
use neon_common::UploadForm;

/// Seed button state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SeedState {
    /// Request in flight; the button is disabled meanwhile
    pub loading: bool,
}

/// Upload dialog state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UploadState {
    /// Whether the dialog is shown
    pub open: bool,
    /// Request in flight; the submit button is disabled meanwhile
    pub loading: bool,
    pub form: UploadForm,
}
