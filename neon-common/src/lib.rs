//! neon-common - pure catalog and playback logic shared by the UI crates
//!
//! Nothing in here touches the DOM or the network, so every transition can be
//! unit tested on the host.

pub mod catalog;
pub mod format;
pub mod genre;
pub mod playback;
pub mod upload;

pub use catalog::{filter_tracks, Artist, Track};
pub use format::format_number;
pub use genre::{Genre, GenreFilter};
pub use playback::{PlaybackSelection, Volume};
pub use upload::{UploadForm, UploadValidationError};
