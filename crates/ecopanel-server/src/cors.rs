//! Cross-origin policy
//!
//! `CORS_ALLOWED_ORIGINS` holds a comma-separated origin list, or `*` for
//! any origin. Unset means the local dashboard dev servers only.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Any,
    Origins(Vec<HeaderValue>),
}

impl Default for CorsPolicy {
    fn default() -> Self {
        CorsPolicy::Origins(
            DEFAULT_ORIGINS
                .iter()
                .map(|&origin| HeaderValue::from_static(origin))
                .collect(),
        )
    }
}

impl std::str::FromStr for CorsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origins: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.is_empty() {
            return Err("no origins given".to_string());
        }
        if origins.contains(&"*") {
            return Ok(CorsPolicy::Any);
        }

        origins
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim_end_matches('/'))
                    .map_err(|_| format!("invalid origin: {}", origin))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CorsPolicy::Origins)
    }
}

impl std::fmt::Display for CorsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorsPolicy::Any => write!(f, "*"),
            CorsPolicy::Origins(origins) => {
                let list: Vec<&str> = origins
                    .iter()
                    .map(|origin| origin.to_str().unwrap_or("<non-ascii>"))
                    .collect();
                write!(f, "{}", list.join(", "))
            }
        }
    }
}

impl CorsPolicy {
    pub fn layer(&self) -> CorsLayer {
        let allow_origin = match self {
            CorsPolicy::Any => AllowOrigin::any(),
            CorsPolicy::Origins(origins) => AllowOrigin::list(origins.clone()),
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_anywhere_means_any() {
        assert_eq!("*".parse::<CorsPolicy>(), Ok(CorsPolicy::Any));
        assert_eq!(
            "https://a.example, *".parse::<CorsPolicy>(),
            Ok(CorsPolicy::Any)
        );
    }

    #[test]
    fn test_origin_list() {
        let policy: CorsPolicy = " https://dash.example/ ,https://admin.example,"
            .parse()
            .unwrap();
        assert_eq!(
            policy,
            CorsPolicy::Origins(vec![
                HeaderValue::from_static("https://dash.example"),
                HeaderValue::from_static("https://admin.example"),
            ])
        );
        assert_eq!(policy.to_string(), "https://dash.example, https://admin.example");
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(" , ".parse::<CorsPolicy>().is_err());
    }

    #[test]
    fn test_default_is_local_dev_only() {
        assert_eq!(
            CorsPolicy::default().to_string(),
            "http://localhost:5173, http://localhost:3000"
        );
    }
}
