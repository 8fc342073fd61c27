//! REST client module for the NHL APIs.
//!
//! Two upstream surfaces are supported, selected with [`ApiFamily`]:
//!
//! - [`ApiFamily::Stats`]: `https://api.nhle.com/stats/rest/{language}`
//! - [`ApiFamily::Web`]: `https://api-web.nhle.com/{version}`
//!
//! Responses are returned as raw [`serde_json::Value`]; the client does not
//! interpret their shape.
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use nhl_api::api::NhlApiClient;
//! use std::time::Duration;
//!
//! let client = NhlApiClient::builder()
//!     .version("v1")
//!     .language("fr")
//!     .verify_tls(false)
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use nhl_api::api::{ApiError, ApiFamily};
//!
//! match client.fetch(ApiFamily::Web, "player/8478402/landing").await {
//!     Ok(player) => println!("{}", player["firstName"]["default"]),
//!     Err(ApiError::UnsuccessfulResponse { status: 404, .. }) => println!("No such player"),
//!     Err(ApiError::RequestFailed(e)) => println!("Network problem: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod family;

// Re-export main types for convenience
pub use client::{NhlApiClient, NhlApiClientBuilder};
pub use error::{ApiError, ApiResult};
pub use family::ApiFamily;
