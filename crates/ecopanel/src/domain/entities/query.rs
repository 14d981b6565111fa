//! PromptQuery - A question bundled with the records it is about

use serde::{Deserialize, Serialize};

use super::{CompanyProfile, SustainabilityDataset};

/// Question plus the company and dataset the caller wants it answered against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptQuery {
    pub question: String,
    pub company: CompanyProfile,
    pub data: SustainabilityDataset,
}

impl PromptQuery {
    pub fn new(
        question: impl Into<String>,
        company: CompanyProfile,
        data: SustainabilityDataset,
    ) -> Self {
        Self {
            question: question.into(),
            company,
            data,
        }
    }
}
