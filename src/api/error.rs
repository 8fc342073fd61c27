//! API error types for the NHL API client.

use thiserror::Error;

/// Errors returned by [`NhlApiClient`](crate::api::NhlApiClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the exchange (connect, DNS, TLS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The server answered with a status outside 200-299
    #[error("Unsuccessful response {status}: {body}")]
    UnsuccessfulResponse { status: u16, body: String },

    /// Family name is neither `stats` nor `web`
    #[error("Unsupported API family: {0}")]
    UnsupportedFamily(String),

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The underlying HTTP client could not be built
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status of an [`ApiError::UnsuccessfulResponse`].
    ///
    /// Transport failures never carry a status since the client does not
    /// turn responses into reqwest errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnsuccessfulResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
