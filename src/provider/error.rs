use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failures talking to the identity provider.
///
/// The `Display` text is what callers see in the `message` field of the envelope.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("unexpected provider response: {0}")]
    Decode(String),
    #[error("invalid provider url: {0}")]
    Url(#[from] url::ParseError),
    #[error("unsupported provider url: {0}")]
    UnsupportedUrl(String),
}

impl Error {
    /// HTTP status returned by the provider, if it answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    /// Build an `Api` error from a non-2xx provider response body.
    ///
    /// GoTrue uses `msg` or `error_description`, PostgREST uses `message`; the first
    /// one present wins, otherwise the status reason phrase is used.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(super::types::message_from_body)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map_or_else(|| status.to_string(), str::to_string)
            });

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }
}
