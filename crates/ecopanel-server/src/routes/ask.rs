//! Ask Routes - Question answering over the dashboard data

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use ecopanel::PromptQuery;

use super::status_for;
use crate::models::{AskRequest, AskResponse};
use crate::AppState;

/// Ask the sustainability advisor a question
///
/// A reply without answer text is still answered, with the fallback text
/// and status 203 instead of 200.
#[utoipa::path(
    post,
    path = "/ai",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Model answer", body = AskResponse),
        (status = 203, description = "Model reply had no answer text; fallback answer", body = AskResponse),
        (status = 400, description = "Malformed body or missing field"),
        (status = 502, description = "Model API unreachable or returned an error"),
        (status = 504, description = "Model API timed out")
    ),
    tag = "Advisor"
)]
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AskResponse>), (StatusCode, String)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected ask body: {}", rejection.body_text());
        (StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let query = PromptQuery::from(payload);
    let answer = state
        .advisor
        .ask(&query)
        .await
        .map_err(|e| (status_for(&e), e.to_string()))?;

    let status = if answer.degraded {
        StatusCode::NON_AUTHORITATIVE_INFORMATION
    } else {
        StatusCode::OK
    };

    Ok((status, Json(AskResponse { answer: answer.text })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ai", post(ask))
}
