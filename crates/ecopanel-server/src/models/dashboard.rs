//! Dashboard DTOs

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the summary endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    /// Year to summarize (default: most recent year in the dataset)
    pub year: Option<i32>,
}
