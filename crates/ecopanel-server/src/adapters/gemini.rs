//! Gemini adapter for the GenerativeModel port.
//!
//! One POST to `{base_url}/{model}:generateContent?key=...` per call. No
//! retries; the client timeout bounds each call.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use ecopanel::{DomainError, GenerateContentRequest, GenerativeModel};

use crate::config::GeminiConfig;

/// Client for Gemini's `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| DomainError::Configuration(err.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    fn transport_error(&self, err: reqwest::Error) -> DomainError {
        if err.is_timeout() {
            DomainError::Timeout(self.timeout)
        } else {
            // Drop the URL so the key query parameter never reaches a log line
            DomainError::Transport(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Value, DomainError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;

        serde_json::from_slice(&body).map_err(|err| {
            DomainError::upstream(status.as_u16(), format!("reply is not JSON: {}", err))
        })
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::upstream(status.as_u16(), message)
}
