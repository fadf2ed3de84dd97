//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. All
//! state is view-scoped and lives only as long as the page.

pub mod app;
pub mod catalog;
pub mod playback;
pub mod remote;
pub mod toasts;

pub use app::*;
pub use catalog::*;
pub use playback::*;
pub use remote::*;
pub use toasts::*;
