//! Dashboard Routes - Static company and sustainability data
//!
//! Every call returns a freshly built copy of the same fixtures.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use ecopanel::{fixtures, CompanyProfile, DatasetSummary, DomainError, SustainabilityDataset};

use super::status_for;
use crate::models::SummaryQuery;
use crate::AppState;

/// Get the company profile
#[utoipa::path(
    get,
    path = "/company",
    responses(
        (status = 200, description = "Company profile", body = CompanyProfile)
    ),
    tag = "Dashboard"
)]
pub async fn get_company(State(state): State<AppState>) -> Json<CompanyProfile> {
    Json(fixtures::company_profile(state.locale))
}

/// Get the sustainability dataset
#[utoipa::path(
    get,
    path = "/sustainability",
    responses(
        (status = 200, description = "Sustainability dataset", body = SustainabilityDataset)
    ),
    tag = "Dashboard"
)]
pub async fn get_sustainability(State(state): State<AppState>) -> Json<SustainabilityDataset> {
    Json(fixtures::sustainability_dataset(state.locale))
}

/// Get per-year totals for the overview cards
#[utoipa::path(
    get,
    path = "/sustainability/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Totals for the year", body = DatasetSummary),
        (status = 404, description = "Dataset has no records")
    ),
    tag = "Dashboard"
)]
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<DatasetSummary>, (axum::http::StatusCode, String)> {
    let data = fixtures::sustainability_dataset(state.locale);

    let summary = match query.year {
        Some(year) => DatasetSummary::for_year(&data, year, state.locale),
        None => DatasetSummary::latest(&data, state.locale).ok_or_else(|| {
            let err = DomainError::NotFound("Dataset has no records".to_string());
            (status_for(&err), err.to_string())
        })?,
    };

    Ok(Json(summary))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/company", get(get_company))
        .route("/sustainability", get(get_sustainability))
        .route("/sustainability/summary", get(get_summary))
}
