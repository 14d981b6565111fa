//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use ecopanel::{
    CompanyProfile, DatasetSummary, EmissionRecord, EnergyRecord, ReportMetadata,
    SupplierRecord, SustainabilityDataset, WasteRecord,
};

use crate::models::{AskRequest, AskResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Advisor endpoints
        super::ask::ask,
        // Dashboard endpoints
        super::dashboard::get_company,
        super::dashboard::get_sustainability,
        super::dashboard::get_summary,
    ),
    info(
        title = "Ecopanel API",
        version = "0.1.0",
        description = "Sustainability dashboard data and a question-answering advisor backed by Gemini.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dashboard", description = "Dashboard - Company profile and sustainability metrics"),
        (name = "Advisor", description = "Advisor - Questions answered by the generative model"),
    ),
    components(
        schemas(
            // Health
            crate::HealthCheck,
            // Dashboard
            CompanyProfile,
            EnergyRecord,
            EmissionRecord,
            WasteRecord,
            SupplierRecord,
            ReportMetadata,
            SustainabilityDataset,
            DatasetSummary,
            // Advisor
            AskRequest,
            AskResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();
        for route in [
            "/health",
            "/ai",
            "/company",
            "/sustainability",
            "/sustainability/summary",
        ] {
            assert!(doc.paths.paths.contains_key(route), "{} missing", route);
        }
    }
}
