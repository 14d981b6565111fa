//! Ecopanel API Models
//!
//! - Ask: question answering over the dashboard data
//! - Dashboard: query parameters for the read endpoints

mod ask;
mod dashboard;

pub use ask::*;
pub use dashboard::*;
