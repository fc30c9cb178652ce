use serde::{Deserialize, Serialize};

/// Error body returned by the shopcarts service on failed requests.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub status_code: Option<u16>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Body of `GET /healthcheck`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: u16,
    pub message: String,
}
