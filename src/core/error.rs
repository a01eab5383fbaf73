use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Per-source failures never leave the spot resolver or the history fetcher; they are
/// logged and the next source is tried. The variants split into the network class
/// ([`AuError::is_network`]) and the parse class ([`AuError::is_parse`]).
#[derive(Debug, Error)]
pub enum AuError {
    /// An error occurred during an HTTP request (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was not readable as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl AuError {
    /// Transport, timeout or HTTP status failure.
    pub fn is_network(&self) -> bool {
        matches!(self, AuError::Http(_) | AuError::Status { .. })
    }

    /// Malformed payload, missing field or unparseable number.
    pub fn is_parse(&self) -> bool {
        matches!(self, AuError::Json(_) | AuError::Csv(_) | AuError::Data(_))
    }
}
