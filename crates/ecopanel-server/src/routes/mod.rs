//! Ecopanel API Routes
//!
//! - /ai - Question answering over the dashboard data
//! - /company - Company profile
//! - /sustainability - Sustainability dataset
//! - /sustainability/summary - Per-year totals

use axum::http::StatusCode;
use ecopanel::DomainError;

pub mod ask;
pub mod dashboard;
pub mod swagger;

/// HTTP status for a domain error
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Upstream { .. } | DomainError::Transport(_) => StatusCode::BAD_GATEWAY,
        DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        DomainError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    use ecopanel::Locale;

    use crate::adapters::GeminiClient;
    use crate::application::AdvisorService;
    use crate::config::GeminiConfig;
    use crate::cors::CorsPolicy;
    use crate::{build_router, AppState};

    /// Router whose model calls go to `gemini_url`, open to any origin
    pub fn app(gemini_url: &str, locale: Locale) -> Router {
        app_with_cors(gemini_url, locale, &CorsPolicy::Any)
    }

    pub fn app_with_cors(gemini_url: &str, locale: Locale, cors: &CorsPolicy) -> Router {
        let config = GeminiConfig::new("test-key")
            .with_base_url(gemini_url)
            .with_timeout(Duration::from_millis(500));
        let client = GeminiClient::new(&config).expect("client");
        let state = AppState {
            advisor: Arc::new(AdvisorService::new(Arc::new(client), locale)),
            locale,
        };
        build_router(state, cors)
    }

    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }
}
