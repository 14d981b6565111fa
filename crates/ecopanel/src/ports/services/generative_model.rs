//! Generative Model Port
//!
//! Abstract interface for the external generative-language API. The domain
//! owns the request envelope and the reading of the reply; adapters only
//! move JSON over the wire.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::{extract_answer, Extraction};

/// `generateContent` request body: `{"contents":[{"parts":[{"text": ...}]}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Wrap a single prompt in the provider envelope
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Generative model interface
///
/// # Example
///
/// ```rust,ignore
/// use ecopanel::ports::GenerativeModel;
///
/// struct GeminiClient { /* ... */ }
///
/// #[async_trait]
/// impl GenerativeModel for GeminiClient {
///     async fn generate_content(&self, request: &GenerateContentRequest)
///         -> Result<Value, DomainError> {
///         // POST to generateContent
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one request and return the raw JSON reply.
    ///
    /// Network failures and non-success statuses are errors; a success reply
    /// of any JSON shape is returned as-is.
    async fn generate_content(&self, request: &GenerateContentRequest)
        -> Result<Value, DomainError>;

    /// Send a single prompt and extract the answer text from the reply
    async fn generate_text(&self, prompt: &str) -> Result<Extraction, DomainError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let reply = self.generate_content(&request).await?;
        Ok(extract_answer(&reply))
    }

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
