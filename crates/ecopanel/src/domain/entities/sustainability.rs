//! Sustainability Dataset - Energy, emissions, waste, suppliers and reports
//!
//! Field names follow the dashboard's camelCase wire format.

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Largest f64 below which every integer is exactly representable
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Serialize whole quantities as JSON integers (`1200`, not `1200.0`)
pub fn serialize_quantity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Energy consumed in one year from one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnergyRecord {
    pub year: i32,
    /// Consumption in kWh
    #[serde(serialize_with = "serialize_quantity")]
    pub value: f64,
    /// e.g. grid or renewable
    pub source: String,
}

/// Carbon emitted in one year under one accounting scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmissionRecord {
    pub year: i32,
    /// Tonnes of CO2
    #[serde(serialize_with = "serialize_quantity")]
    pub value: f64,
    pub scope: String,
}

/// Waste generated in one year of one kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WasteRecord {
    pub year: i32,
    /// Tonnes
    #[serde(serialize_with = "serialize_quantity")]
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Supplier with its sustainability rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    pub name: String,
    /// Ordinal rating: Low / Medium / High
    pub sustainability_rating: String,
    pub location: String,
}

/// Published sustainability report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportMetadata {
    pub id: String,
    pub title: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Everything the dashboard knows about a company's footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityDataset {
    pub energy_consumption: Vec<EnergyRecord>,
    pub carbon_emissions: Vec<EmissionRecord>,
    pub waste_generation: Vec<WasteRecord>,
    pub supplier_data: Vec<SupplierRecord>,
    #[serde(default)]
    pub reports: Vec<ReportMetadata>,
}

impl SustainabilityDataset {
    /// Emission records whose scope equals `scope` exactly
    pub fn emissions_in_scope<'a>(
        &'a self,
        scope: &'a str,
    ) -> impl Iterator<Item = &'a EmissionRecord> + 'a {
        self.carbon_emissions.iter().filter(move |e| e.scope == scope)
    }

    /// Waste records whose type equals `kind` exactly
    pub fn waste_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a WasteRecord> + 'a {
        self.waste_generation.iter().filter(move |w| w.kind == kind)
    }

    /// First and last year covered by the energy records
    pub fn energy_year_range(&self) -> Option<(i32, i32)> {
        let years = self.energy_consumption.iter().map(|e| e.year);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((min, max))
    }

    /// Most recent year with any energy, emission or waste record
    pub fn latest_year(&self) -> Option<i32> {
        self.energy_consumption
            .iter()
            .map(|e| e.year)
            .chain(self.carbon_emissions.iter().map(|e| e.year))
            .chain(self.waste_generation.iter().map(|w| w.year))
            .max()
    }
}
