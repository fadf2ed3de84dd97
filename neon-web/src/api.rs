//! HTTP transport for the catalog functions
//!
//! Server-reported failures are not transport errors: `post_json` returns any
//! completed exchange with its status and JSON body, and callers decide what a
//! non-2xx status means.

use async_trait::async_trait;
use neon_common::Track;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),
    /// The body was not JSON or not the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
    /// Non-2xx answer to a read request
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

/// A completed exchange: HTTP status and parsed JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: Value,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body's `error` field, when present and non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }
}

/// Transport seam for the remote catalog
#[async_trait(?Send)]
pub trait CatalogApi {
    /// POST with `Content-Type: application/json`; `None` sends an empty body.
    async fn post_json(&self, url: &str, body: Option<Value>)
        -> Result<EndpointResponse, ApiError>;

    /// GET the full track list (`{tracks: [...]}`)
    async fn fetch_tracks(&self, url: &str) -> Result<Vec<Track>, ApiError>;
}

#[derive(Deserialize)]
struct TracksEnvelope {
    tracks: Vec<Track>,
}

/// `reqwest`-backed implementation (browser fetch on wasm)
#[derive(Clone, Debug, Default)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
}

impl HttpCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn post_json(
        &self,
        url: &str,
        body: Option<Value>,
    ) -> Result<EndpointResponse, ApiError> {
        let mut request = self.client.post(url).header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(EndpointResponse { status, body })
    }

    async fn fetch_tracks(&self, url: &str) -> Result<Vec<Track>, ApiError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        tracks_from_response(EndpointResponse { status, body })
    }
}

fn tracks_from_response(response: EndpointResponse) -> Result<Vec<Track>, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Server {
            status: response.status,
            message: response
                .error_message()
                .unwrap_or("request failed")
                .to_string(),
        });
    }

    let envelope: TracksEnvelope =
        serde_json::from_value(response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.tracks)
}
