//! Widgets for the seed and upload endpoints

mod seed_button;
mod upload_dialog;

pub use seed_button::SeedButtonView;
pub use upload_dialog::UploadTrackDialogView;
