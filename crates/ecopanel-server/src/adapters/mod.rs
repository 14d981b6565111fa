//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

mod gemini;

pub use gemini::GeminiClient;
