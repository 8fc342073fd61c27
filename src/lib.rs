//! # NHL API Rust SDK
//!
//! A thin client for the public NHL stats and web APIs.
//!
//! ## Modules
//!
//! - [`api`]: the HTTP client, family selector and error types
//! - [`network`]: upstream host constants and defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nhl_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NhlApiClient::new()?;
//!
//!     let standings = client.fetch(ApiFamily::Web, "standings/now").await?;
//!     println!("{}", standings["standings"][0]["teamName"]["default"]);
//!
//!     let goalies = client
//!         .fetch_with_params(ApiFamily::Stats, "goalie/summary", &[("limit", "10")])
//!         .await?;
//!     println!("{}", goalies["total"]);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants (stats and web API roots, defaults).
pub mod network;

/// HTTP client for the stats and web APIs.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use nhl_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{ApiError, ApiFamily, ApiResult, NhlApiClient, NhlApiClientBuilder};

    pub use crate::network::{DEFAULT_LANGUAGE, DEFAULT_VERSION, STATS_API_URL, WEB_API_URL};
}
