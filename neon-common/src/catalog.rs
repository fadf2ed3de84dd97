//! Catalog records and client-side filtering

use crate::genre::{Genre, GenreFilter};
use serde::{Deserialize, Serialize};

/// A track in the in-memory catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub artist: String,
    /// Display string such as "3:45", never parsed
    #[serde(default)]
    pub duration: String,
    pub genre: Genre,
    #[serde(default)]
    pub plays: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub cover_url: String,
    /// Source file for tracks loaded from the tracks endpoint
    #[serde(default)]
    pub audio_url: Option<String>,
}

/// Artist card info
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub name: String,
    /// Pre-formatted follower count ("125K")
    pub followers: String,
    pub tracks: u32,
    pub avatar_url: String,
}

impl Artist {
    /// First letter of the name, shown when the avatar fails to load
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

impl Track {
    /// Case-insensitive substring match against title or artist.
    ///
    /// `query_lower` must already be lowercased.
    fn matches_query(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || self.title.to_lowercase().contains(query_lower)
            || self.artist.to_lowercase().contains(query_lower)
    }
}

/// Ordered subsequence of `tracks` matching both the query and the genre filter.
///
/// Catalog order is preserved; there is no relevance ranking.
pub fn filter_tracks<'a>(tracks: &'a [Track], query: &str, filter: &GenreFilter) -> Vec<&'a Track> {
    let query_lower = query.to_lowercase();
    tracks
        .iter()
        .filter(|track| track.matches_query(&query_lower) && filter.matches(&track.genre))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: i64, title: &str, artist: &str, genre: Genre) -> Track {
        Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration: "3:30".to_string(),
            genre,
            plays: 0,
            likes: 0,
            cover_url: String::new(),
            audio_url: None,
        }
    }

    fn catalog() -> Vec<Track> {
        vec![
            track(1, "Neon Dreams", "CyberSynth", Genre::Synthwave),
            track(2, "Digital Rain", "Matrix Sound", Genre::Electronic),
            track(3, "Chrome Hearts", "Pulse Wave", Genre::Cyberpunk),
            track(4, "Virtual Reality", "Neural Net", Genre::Techno),
            track(5, "Electric Soul", "Synth Master", Genre::Synthwave),
        ]
    }

    fn ids(tracks: &[&Track]) -> Vec<i64> {
        tracks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_query_and_all_returns_full_catalog() {
        let tracks = catalog();
        let result = filter_tracks(&tracks, "", &GenreFilter::All);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let tracks = catalog();
        let result = filter_tracks(&tracks, "RAIN", &GenreFilter::All);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_query_matches_artist() {
        let tracks = catalog();
        let result = filter_tracks(&tracks, "synth", &GenreFilter::All);
        // "CyberSynth" and "Synth Master"
        assert_eq!(ids(&result), vec![1, 5]);
    }

    #[test]
    fn test_genre_filter_alone() {
        let tracks = catalog();
        let result = filter_tracks(&tracks, "", &GenreFilter::Only(Genre::Synthwave));
        assert_eq!(ids(&result), vec![1, 5]);
    }

    #[test]
    fn test_query_and_genre_are_combined() {
        let tracks = catalog();
        let result = filter_tracks(&tracks, "soul", &GenreFilter::Only(Genre::Synthwave));
        assert_eq!(ids(&result), vec![5]);

        let result = filter_tracks(&tracks, "soul", &GenreFilter::Only(Genre::Techno));
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let tracks = catalog();
        for query in ["", "e", "ne", "wave", "zzz"] {
            for filter in GenreFilter::chips() {
                let result = filter_tracks(&tracks, query, &filter);
                let expected: Vec<i64> = tracks
                    .iter()
                    .filter(|t| {
                        let q = query.to_lowercase();
                        (t.title.to_lowercase().contains(&q)
                            || t.artist.to_lowercase().contains(&q))
                            && filter.matches(&t.genre)
                    })
                    .map(|t| t.id)
                    .collect();
                assert_eq!(ids(&result), expected, "query={query:?} filter={filter:?}");
            }
        }
    }

    #[test]
    fn test_unknown_genre_only_matches_same_name() {
        let mut tracks = catalog();
        tracks.push(track(6, "Levels", "Avicii", Genre::from("Progressive House")));
        let filter = GenreFilter::Only(Genre::from("Progressive House"));
        assert_eq!(ids(&filter_tracks(&tracks, "", &filter)), vec![6]);
        assert_eq!(filter_tracks(&tracks, "", &GenreFilter::All).len(), 6);
    }

    #[test]
    fn test_deserializes_endpoint_track() {
        let json = r#"{
            "id": 7,
            "title": "Levels",
            "artist": "Avicii",
            "genre": "Progressive House",
            "duration": "3:19",
            "audioUrl": "https://example.com/levels.mp3",
            "coverUrl": "https://example.com/levels.jpg",
            "plays": 1245000,
            "likes": 95000,
            "uploadedAt": "2025-01-01T00:00:00"
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, 7);
        assert_eq!(track.genre, Genre::Other("Progressive House".to_string()));
        assert_eq!(track.audio_url.as_deref(), Some("https://example.com/levels.mp3"));
        assert_eq!(track.plays, 1_245_000);
    }

    #[test]
    fn test_artist_initial() {
        let artist = Artist {
            id: 1,
            name: "Pulse Wave".to_string(),
            followers: "156K".to_string(),
            tracks: 52,
            avatar_url: String::new(),
        };
        assert_eq!(artist.initial(), "P");
    }

    #[test]
    fn test_deserializes_artist() {
        let json = r#"{
            "id": 3,
            "name": "Neon Pulse",
            "followers": "98K",
            "tracks": 41,
            "avatarUrl": "https://example.com/neon.jpg"
        }"#;
        let artist: Artist = serde_json::from_str(json).unwrap();
        assert_eq!(artist.name, "Neon Pulse");
        assert_eq!(artist.tracks, 41);
        assert_eq!(artist.avatar_url, "https://example.com/neon.jpg");
    }
}
