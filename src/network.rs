//! Network URL constants for the NHL APIs.

/// Root of the stats REST API. The language code is appended per request.
pub const STATS_API_URL: &str = "https://api.nhle.com/stats/rest";

/// Root of the web API. The API version is appended per request.
pub const WEB_API_URL: &str = "https://api-web.nhle.com";

/// Default web API version.
pub const DEFAULT_VERSION: &str = "v1";

/// Default stats API language.
pub const DEFAULT_LANGUAGE: &str = "en";
