//! Domain Services
//!
//! Stateless functions over domain entities.
//! - prompt: PromptQuery -> natural-language prompt
//! - extractor: model reply -> answer text
//! - fixtures: the static dashboard data
//! - summary: per-year overview totals

pub mod fixtures;

mod extractor;
mod prompt;
mod summary;

pub use extractor::*;
pub use prompt::*;
pub use summary::*;
