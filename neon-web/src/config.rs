//! Endpoint and logging configuration
//!
//! The browser build has no process environment, so overrides are read from
//! `NEON_*` variables at compile time.

use tracing::Level;

const DEFAULT_SEED_URL: &str =
    "https://functions.poehali.dev/66d80d7d-cf86-4de0-911a-bd2b2d2198c4";
const DEFAULT_TRACKS_URL: &str =
    "https://functions.poehali.dev/143927f6-1dc4-4923-b7ac-bd22dc1c91c8";

/// Absolute URLs of the remote catalog functions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    /// POST with an empty body fills the catalog with popular tracks
    pub seed_url: String,
    /// GET lists tracks, POST uploads one
    pub tracks_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            tracks_url: DEFAULT_TRACKS_URL.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Defaults, overridden by `NEON_SEED_URL` / `NEON_TRACKS_URL` when set at build time
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("NEON_SEED_URL"), option_env!("NEON_TRACKS_URL"))
    }

    fn with_overrides(seed_url: Option<&str>, tracks_url: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            seed_url: non_empty(seed_url).map_or(defaults.seed_url, str::to_string),
            tracks_url: non_empty(tracks_url).map_or(defaults.tracks_url, str::to_string),
        }
    }
}

/// Log level from `NEON_LOG_LEVEL`, `info` when unset or unparseable
pub fn log_level() -> Level {
    parse_level(option_env!("NEON_LOG_LEVEL"))
}

fn parse_level(value: Option<&str>) -> Level {
    non_empty(value)
        .and_then(|v| v.parse().ok())
        .unwrap_or(Level::INFO)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_fixed_functions() {
        let config = EndpointConfig::default();
        assert!(config.seed_url.ends_with("66d80d7d-cf86-4de0-911a-bd2b2d2198c4"));
        assert!(config.tracks_url.ends_with("143927f6-1dc4-4923-b7ac-bd22dc1c91c8"));
    }

    #[test]
    fn test_overrides_replace_only_given_urls() {
        let config = EndpointConfig::with_overrides(Some("http://localhost:9000/seed"), None);
        assert_eq!(config.seed_url, "http://localhost:9000/seed");
        assert_eq!(config.tracks_url, DEFAULT_TRACKS_URL);

        // Blank overrides are ignored
        let config = EndpointConfig::with_overrides(Some("  "), Some(""));
        assert_eq!(config, EndpointConfig::default());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some("WARN")), Level::WARN);
        assert_eq!(parse_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }
}
