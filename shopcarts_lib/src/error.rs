//! Error types for the view-binding layer.

use std::fmt;

/// Flash text shown when a failure carries no server message.
pub const FALLBACK_MESSAGE: &str = "Server error!";

/// Errors produced by the binding layer, wrapping upstream API errors and
/// adding rendering and task failures.
#[derive(Debug)]
pub enum ShopcartsError {
    /// An error from the underlying API client.
    Api(shopcarts_api::Error),
    /// Writing a results table failed.
    Render(String),
    /// The task running an action did not complete (panicked or was aborted).
    Task(String),
}

impl ShopcartsError {
    /// Text for the flash area: the server's message verbatim, or
    /// [`FALLBACK_MESSAGE`] when there is none.
    pub fn flash_message(&self) -> String {
        match self {
            Self::Api(e) => e.message().unwrap_or(FALLBACK_MESSAGE).to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ShopcartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Render(msg) => write!(f, "Render error: {}", msg),
            Self::Task(msg) => write!(f, "Task error: {}", msg),
        }
    }
}

impl std::error::Error for ShopcartsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<shopcarts_api::Error> for ShopcartsError {
    fn from(e: shopcarts_api::Error) -> Self {
        Self::Api(e)
    }
}
