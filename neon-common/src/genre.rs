use serde::{Deserialize, Serialize};
use std::fmt;

/// Track genre
///
/// The catalog works with a fixed set of genres. Tracks coming back from the
/// tracks endpoint may carry anything the uploader typed, so unknown names are
/// kept verbatim in `Other` instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Synthwave,
    Electronic,
    Cyberpunk,
    Techno,
    House,
    Ambient,
    Other(String),
}

impl Genre {
    /// Genres offered by the upload form, in display order
    pub const UPLOADABLE: [Genre; 6] = [
        Genre::Synthwave,
        Genre::Electronic,
        Genre::Cyberpunk,
        Genre::Techno,
        Genre::House,
        Genre::Ambient,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Genre::Synthwave => "Synthwave",
            Genre::Electronic => "Electronic",
            Genre::Cyberpunk => "Cyberpunk",
            Genre::Techno => "Techno",
            Genre::House => "House",
            Genre::Ambient => "Ambient",
            Genre::Other(name) => name,
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for Genre {
    fn default() -> Self {
        Genre::Synthwave
    }
}

impl From<&str> for Genre {
    fn from(name: &str) -> Self {
        match name {
            "Synthwave" => Genre::Synthwave,
            "Electronic" => Genre::Electronic,
            "Cyberpunk" => Genre::Cyberpunk,
            "Techno" => Genre::Techno,
            "House" => Genre::House,
            "Ambient" => Genre::Ambient,
            other => Genre::Other(other.to_string()),
        }
    }
}

impl From<String> for Genre {
    fn from(name: String) -> Self {
        Genre::from(name.as_str())
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genre constraint applied to the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum GenreFilter {
    /// Sentinel: no genre constraint
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    /// Filter chips shown above the track list
    pub fn chips() -> Vec<GenreFilter> {
        vec![
            GenreFilter::All,
            GenreFilter::Only(Genre::Synthwave),
            GenreFilter::Only(Genre::Electronic),
            GenreFilter::Only(Genre::Cyberpunk),
            GenreFilter::Only(Genre::Techno),
        ]
    }

    pub fn matches(&self, genre: &Genre) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(wanted) => wanted == genre,
        }
    }

    /// Chip label ("All" for the sentinel)
    pub fn label(&self) -> &str {
        match self {
            GenreFilter::All => "All",
            GenreFilter::Only(genre) => genre.as_str(),
        }
    }
}
