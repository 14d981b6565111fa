//! Server configuration
//!
//! Read once at startup from the Shuttle secret store, falling back to the
//! process environment (`.env` is loaded by `main`). The first source that
//! holds a key wins.

use std::time::Duration;

use ecopanel::Locale;
use thiserror::Error;

use crate::cors::CorsPolicy;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const GEMINI_TIMEOUT_SECS: &str = "GEMINI_TIMEOUT_SECS";
pub const ECOPANEL_LOCALE: &str = "ECOPANEL_LOCALE";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Anything that can answer "what is the value of this key"
pub trait SecretSource {
    fn secret(&self, key: &str) -> Option<String>;
}

impl SecretSource for shuttle_runtime::SecretStore {
    fn secret(&self, key: &str) -> Option<String> {
        self.get(key)
    }
}

/// Process environment
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn secret(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Gemini connection settings
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the key out of logs
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub gemini: GeminiConfig,
    pub locale: Locale,
    pub cors: CorsPolicy,
}

impl ServerConfig {
    /// Load configuration, consulting `sources` in order for each key
    pub fn load(sources: &[&dyn SecretSource]) -> Result<Self, ConfigError> {
        let lookup = |key: &str| {
            sources
                .iter()
                .find_map(|source| source.secret(key))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = lookup(GEMINI_API_KEY).ok_or(ConfigError::Missing(GEMINI_API_KEY))?;
        let mut gemini = GeminiConfig::new(api_key);

        if let Some(model) = lookup(GEMINI_MODEL) {
            gemini.model = model;
        }
        if let Some(base_url) = lookup(GEMINI_BASE_URL) {
            gemini = gemini.with_base_url(base_url.trim_end_matches('/'));
        }
        if let Some(secs) = lookup(GEMINI_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|e| ConfigError::Invalid {
                key: GEMINI_TIMEOUT_SECS,
                reason: format!("{}", e),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    key: GEMINI_TIMEOUT_SECS,
                    reason: "must be at least 1".to_string(),
                });
            }
            gemini = gemini.with_timeout(Duration::from_secs(secs));
        }

        let locale = lookup(ECOPANEL_LOCALE)
            .map(|s| s.parse::<Locale>())
            .transpose()
            .map_err(|reason| ConfigError::Invalid {
                key: ECOPANEL_LOCALE,
                reason,
            })?
            .unwrap_or_default();

        let cors = match lookup(CORS_ALLOWED_ORIGINS) {
            Some(origins) => origins.parse().map_err(|reason| ConfigError::Invalid {
                key: CORS_ALLOWED_ORIGINS,
                reason,
            })?,
            None => CorsPolicy::default(),
        };

        Ok(Self {
            gemini,
            locale,
            cors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapSecrets(HashMap<&'static str, &'static str>);

    impl MapSecrets {
        fn new(pairs: &[(&'static str, &'static str)]) -> Self {
            Self(pairs.iter().copied().collect())
        }
    }

    impl SecretSource for MapSecrets {
        fn secret(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let secrets = MapSecrets::new(&[(GEMINI_API_KEY, "k")]);
        let config = ServerConfig::load(&[&secrets]).unwrap();

        assert_eq!(config.gemini.api_key, "k");
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.cors, CorsPolicy::default());
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let secrets = MapSecrets::new(&[(GEMINI_MODEL, "gemini-pro")]);
        let err = ServerConfig::load(&[&secrets]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(GEMINI_API_KEY)));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let secrets = MapSecrets::new(&[(GEMINI_API_KEY, "   ")]);
        assert!(ServerConfig::load(&[&secrets]).is_err());
    }

    #[test]
    fn test_first_source_wins() {
        let store = MapSecrets::new(&[(GEMINI_API_KEY, "from-store")]);
        let env = MapSecrets::new(&[(GEMINI_API_KEY, "from-env"), (ECOPANEL_LOCALE, "pt-br")]);
        let config = ServerConfig::load(&[&store, &env]).unwrap();

        assert_eq!(config.gemini.api_key, "from-store");
        assert_eq!(config.locale, Locale::PtBr);
    }

    #[test]
    fn test_overrides() {
        let secrets = MapSecrets::new(&[
            (GEMINI_API_KEY, "k"),
            (GEMINI_MODEL, "gemini-1.5-pro"),
            (GEMINI_BASE_URL, "http://localhost:9999/models/"),
            (GEMINI_TIMEOUT_SECS, "5"),
            (CORS_ALLOWED_ORIGINS, "*"),
        ]);
        let config = ServerConfig::load(&[&secrets]).unwrap();

        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.base_url, "http://localhost:9999/models");
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(config.cors, CorsPolicy::Any);
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            (GEMINI_TIMEOUT_SECS, "soon"),
            (GEMINI_TIMEOUT_SECS, "0"),
            (ECOPANEL_LOCALE, "klingon"),
        ] {
            let secrets = MapSecrets::new(&[(GEMINI_API_KEY, "k"), (key, value)]);
            let err = ServerConfig::load(&[&secrets]).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { key: k, .. } if k == key),
                "{} = {} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", GeminiConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
