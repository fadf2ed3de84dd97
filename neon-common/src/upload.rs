//! Upload form state and local validation

use crate::genre::Genre;
use serde::Serialize;
use thiserror::Error;

/// Local validation failure; the form is never sent when this is returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct UploadValidationError {
    pub missing: Vec<&'static str>,
}

/// Fields of the upload dialog.
///
/// Serializes to the upload endpoint's request body
/// (`{title, artist, genre, duration, audioUrl, coverUrl}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadForm {
    pub title: String,
    pub artist: String,
    pub genre: Genre,
    pub duration: String,
    pub audio_url: String,
    pub cover_url: String,
}

impl UploadForm {
    /// Title, artist and audio URL must be non-empty.
    pub fn validate(&self) -> Result<(), UploadValidationError> {
        let missing: Vec<&'static str> = [
            ("title", &self.title),
            ("artist", &self.artist),
            ("audioUrl", &self.audio_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(UploadValidationError { missing })
        }
    }

    pub fn reset(&mut self) {
        *self = UploadForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UploadForm {
        UploadForm {
            title: "Neon Dreams".to_string(),
            artist: "CyberSynth".to_string(),
            genre: Genre::Cyberpunk,
            duration: "3:45".to_string(),
            audio_url: "https://example.com/track.mp3".to_string(),
            cover_url: String::new(),
        }
    }

    #[test]
    fn test_default_genre_is_synthwave() {
        assert_eq!(UploadForm::default().genre, Genre::Synthwave);
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut form = filled();
        form.duration.clear();
        form.cover_url.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let clear_title: fn(&mut UploadForm) = |f| f.title.clear();
        let clear_artist: fn(&mut UploadForm) = |f| f.artist.clear();
        let clear_audio: fn(&mut UploadForm) = |f| f.audio_url.clear();

        for (clear, name) in [
            (clear_title, "title"),
            (clear_artist, "artist"),
            (clear_audio, "audioUrl"),
        ] {
            let mut form = filled();
            clear(&mut form);
            let err = form.validate().unwrap_err();
            assert_eq!(err.missing, vec![name]);
        }
    }

    #[test]
    fn test_error_lists_all_missing_fields() {
        let err = UploadForm::default().validate().unwrap_err();
        assert_eq!(err.missing, vec!["title", "artist", "audioUrl"]);
        assert_eq!(
            err.to_string(),
            "missing required fields: title, artist, audioUrl"
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, UploadForm::default());
    }

    #[test]
    fn test_request_body_uses_camel_case() {
        let body = serde_json::to_value(filled()).unwrap();
        assert_eq!(body["audioUrl"], "https://example.com/track.mp3");
        assert_eq!(body["coverUrl"], "");
        assert_eq!(body["genre"], "Cyberpunk");
        assert!(body.get("audio_url").is_none());
    }
}
