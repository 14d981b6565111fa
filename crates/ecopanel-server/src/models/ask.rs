//! Ask DTOs - Question answering

use ecopanel::{CompanyProfile, PromptQuery, SustainabilityDataset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Question plus the records it should be answered against
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    pub question: String,
    pub company: CompanyProfile,
    pub data: SustainabilityDataset,
}

impl From<AskRequest> for PromptQuery {
    fn from(request: AskRequest) -> Self {
        PromptQuery::new(request.question, request.company, request.data)
    }
}

/// Model answer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
}
