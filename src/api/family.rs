//! Upstream API families.

use std::str::FromStr;

use crate::api::error::ApiError;

/// Which NHL API surface a request targets.
///
/// The two families live on different hosts and are keyed differently:
/// the stats API by language, the web API by version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ApiFamily {
    /// `api.nhle.com/stats/rest/{language}`
    Stats,
    /// `api-web.nhle.com/{version}`
    Web,
}

impl ApiFamily {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Web => "web",
        }
    }
}

impl std::fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiFamily {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stats" => Ok(Self::Stats),
            "web" => Ok(Self::Web),
            _ => Err(ApiError::UnsupportedFamily(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_families() {
        assert_eq!("stats".parse::<ApiFamily>().unwrap(), ApiFamily::Stats);
        assert_eq!("WEB".parse::<ApiFamily>().unwrap(), ApiFamily::Web);
        assert_eq!(" web ".parse::<ApiFamily>().unwrap(), ApiFamily::Web);
    }

    #[test]
    fn test_parse_unknown_family() {
        match "records".parse::<ApiFamily>() {
            Err(ApiError::UnsupportedFamily(name)) => assert_eq!(name, "records"),
            other => panic!("expected UnsupportedFamily, got {:?}", other),
        }
        assert!("".parse::<ApiFamily>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ApiFamily::Stats).unwrap(), r#""stats""#);
        let family: ApiFamily = serde_json::from_str(r#""web""#).unwrap();
        assert_eq!(family, ApiFamily::Web);
        assert_eq!(ApiFamily::Web.to_string(), "web");
    }
}
