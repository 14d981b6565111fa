//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod locale;

pub use locale::*;
