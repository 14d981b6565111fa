//! Ecopanel Domain Library
//!
//! Core domain types and interfaces for the Ecopanel sustainability dashboard.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Company profile, sustainability dataset, prompt query, answer
//!   - `value_objects/`: Immutable value types (Locale)
//!   - `services/`: Prompt rendering, response extraction, fixtures, summaries
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External generative model interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use ecopanel::{fixtures, render_prompt, Locale, PromptQuery};
//!
//! let query = PromptQuery::new(
//!     "What is our energy trend?",
//!     fixtures::company_profile(Locale::En),
//!     fixtures::sustainability_dataset(Locale::En),
//! );
//! let prompt = render_prompt(&query, Locale::En);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    extract_answer, fixtures, render_prompt, Answer, CompanyProfile, DatasetSummary, DomainError,
    EmissionRecord, EnergyRecord, Extraction, Locale, PromptQuery, ReportMetadata,
    SupplierRecord, SustainabilityDataset, WasteRecord, FALLBACK_ANSWER,
};
pub use ports::{Content, GenerateContentRequest, GenerativeModel, Part};
