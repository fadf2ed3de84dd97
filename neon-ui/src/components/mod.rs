//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod catalog;
pub mod dialog;
pub mod error_banner;
pub mod header;
pub mod hero;
pub mod icons;
pub mod playback;
pub mod remote;
pub mod text_input;
pub mod toast;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use catalog::{
    ArtistCard, CatalogTabBar, CatalogView, GenreFilterBar, PlaylistsPanel, TrackRow,
};
pub use dialog::DialogView;
pub use error_banner::ErrorBanner;
pub use header::{default_nav_items, HeaderView};
pub use hero::HeroView;
pub use icons::{
    AlertTriangleIcon, DatabaseIcon, DownloadIcon, HeartIcon, LoaderIcon, MusicIcon, PauseIcon,
    PlayIcon, SearchIcon, UploadIcon, XIcon,
};
pub use playback::NowPlayingBarView;
pub use remote::{SeedButtonView, UploadTrackDialogView};
pub use text_input::TextInput;
pub use toast::ToastStackView;
