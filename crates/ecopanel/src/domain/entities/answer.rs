//! Answer - Text produced by the generative model

use serde::{Deserialize, Serialize};

use crate::domain::services::Extraction;

/// Answer to a PromptQuery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    /// The model reply had no extractable text and `text` is the fallback
    pub degraded: bool,
}

impl From<Extraction> for Answer {
    fn from(extraction: Extraction) -> Self {
        let degraded = extraction.is_fallback();
        Self {
            text: extraction.into_text(),
            degraded,
        }
    }
}
