//! CompanyProfile - Who the dashboard is about

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Company profile shown on the dashboard overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
}

impl CompanyProfile {
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        size: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            size: size.into(),
            location: location.into(),
        }
    }
}
