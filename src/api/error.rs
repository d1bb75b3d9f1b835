//! API error types

use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with status >= 400; the body is echoed verbatim
    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, refused, timeout)
    #[error("Connection error: {reason}{}", hint_line(.hint))]
    Connection { reason: String, hint: Option<String> },

    /// A success response did not contain valid JSON
    #[error("Invalid JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

fn hint_line(hint: &Option<String>) -> String {
    hint.as_deref().map(|h| format!("\n{}", h)).unwrap_or_default()
}

impl ApiError {
    /// Builds a connection error from a transport failure
    ///
    /// The reason includes the whole source chain so the root cause
    /// (e.g. "Connection refused") is visible.
    pub(crate) fn connection(err: &reqwest::Error, hint: Option<String>) -> Self {
        let mut reason = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            source = cause.source();
        }
        ApiError::Connection { reason, hint }
    }
}
