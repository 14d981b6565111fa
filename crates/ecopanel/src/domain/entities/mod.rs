//! Domain Entities
//!
//! Plain records exchanged with the dashboard. Nothing here has a lifecycle
//! beyond the request that carries it.
//! - CompanyProfile: who the company is
//! - SustainabilityDataset: energy, emissions, waste, suppliers, reports
//! - PromptQuery: a question bundled with the records it is about
//! - Answer: the text produced by the model

mod answer;
mod company;
mod query;
mod sustainability;

pub use answer::*;
pub use company::*;
pub use query::*;
pub use sustainability::*;
