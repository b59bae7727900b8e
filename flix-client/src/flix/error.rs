//! Error types for the API client.

use crate::directory::ScrapeError;

/// A well-formed response that does not have the shape we expect.
///
/// Parse errors are never retried: asking again would return the same body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A required field is absent.
    #[error("{entity} record is missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field is present but has the wrong type or value.
    #[error("{entity} record has an invalid field: {message}")]
    InvalidField {
        entity: &'static str,
        message: String,
    },

    /// The value is not a JSON object.
    #[error("{entity} record is not a JSON object")]
    NotAnObject { entity: &'static str },

    /// The response has the wrong overall structure.
    #[error("unexpected {what}: expected {expected}")]
    UnexpectedShape {
        what: &'static str,
        expected: &'static str,
    },
}

/// Errors from the API client.
#[derive(Debug, thiserror::Error)]
pub enum FlixError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("transport error: {0}")]
    Transport(String),

    /// API returned a non-2xx status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body is not valid JSON
    #[error("JSON decode error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response decoded but a record is malformed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// City directory page is missing expected markup
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    /// A configured header value cannot be sent
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl FlixError {
    /// Whether the failure may be transient and worth another attempt.
    ///
    /// Transport failures, error statuses and undecodable bodies are
    /// retried; malformed records and markup are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FlixError::Http(_)
                | FlixError::Transport(_)
                | FlixError::Api { .. }
                | FlixError::Json { .. }
        )
    }
}
