//! Catalog view components

mod artist_card;
mod genre_filter;
mod playlists_panel;
mod tabs;
mod track_row;
mod view;

pub use artist_card::ArtistCard;
pub use genre_filter::GenreFilterBar;
pub use playlists_panel::PlaylistsPanel;
pub use tabs::CatalogTabBar;
pub use track_row::TrackRow;
pub use view::CatalogView;
