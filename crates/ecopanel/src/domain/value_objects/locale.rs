//! Locale - Language of the prompt wording, record tags and fixtures

use serde::{Deserialize, Serialize};

/// Dashboard locale
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Emission scope tag for direct emissions
    pub fn scope_1(&self) -> &'static str {
        match self {
            Locale::En => "Scope 1",
            Locale::PtBr => "Escopo 1",
        }
    }

    /// Emission scope tag for indirect emissions
    pub fn scope_2(&self) -> &'static str {
        match self {
            Locale::En => "Scope 2",
            Locale::PtBr => "Escopo 2",
        }
    }

    pub fn hazardous(&self) -> &'static str {
        match self {
            Locale::En => "Hazardous",
            Locale::PtBr => "Perigoso",
        }
    }

    pub fn non_hazardous(&self) -> &'static str {
        match self {
            Locale::En => "Non-hazardous",
            Locale::PtBr => "Não Perigoso",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::PtBr => write!(f, "pt-br"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "pt-br" | "pt_br" | "pt" | "portuguese" => Ok(Locale::PtBr),
            _ => Err(format!("Unknown locale: {}. Valid: en, pt-br", s)),
        }
    }
}
