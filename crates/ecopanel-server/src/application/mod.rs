//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates with external services.

mod advisor_service;

pub use advisor_service::AdvisorService;
