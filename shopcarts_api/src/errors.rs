//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, bad URL, or unparsable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status.
    ///
    /// `message` is the `message` field of the server's JSON error body when
    /// one could be read; `body` holds a snippet of the raw response.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        message: Option<String>,
        body: String,
    },
}

impl Error {
    /// The server-supplied error message, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { message, .. } => message.as_deref(),
            Self::RequestFailed => None,
        }
    }

    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::RequestFailed => None,
        }
    }
}
