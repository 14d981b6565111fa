//! Service Ports
//!
//! Abstract interfaces for external services.

mod generative_model;

pub use generative_model::*;
