//! Dataset Summary - Per-year totals shown on the dashboard overview

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{serialize_quantity, Locale, SustainabilityDataset};

/// Totals for one year of a SustainabilityDataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub year: i32,
    /// kWh across all sources
    #[serde(serialize_with = "serialize_quantity")]
    pub energy_consumption: f64,
    /// t CO2 across all scopes
    #[serde(serialize_with = "serialize_quantity")]
    pub carbon_emissions: f64,
    /// t across all waste types
    #[serde(serialize_with = "serialize_quantity")]
    pub waste_generation: f64,
    #[serde(serialize_with = "serialize_quantity")]
    pub hazardous_waste: f64,
    #[serde(serialize_with = "serialize_quantity")]
    pub non_hazardous_waste: f64,
}

impl DatasetSummary {
    /// Summarize `year`, partitioning waste with the tags of `locale`
    pub fn for_year(data: &SustainabilityDataset, year: i32, locale: Locale) -> Self {
        let energy_consumption: f64 = data
            .energy_consumption
            .iter()
            .filter(|e| e.year == year)
            .map(|e| e.value)
            .sum();
        let carbon_emissions: f64 = data
            .carbon_emissions
            .iter()
            .filter(|e| e.year == year)
            .map(|e| e.value)
            .sum();
        let waste_generation: f64 = data
            .waste_generation
            .iter()
            .filter(|w| w.year == year)
            .map(|w| w.value)
            .sum();
        let hazardous_waste: f64 = data
            .waste_of_kind(locale.hazardous())
            .filter(|w| w.year == year)
            .map(|w| w.value)
            .sum();
        let non_hazardous_waste: f64 = data
            .waste_of_kind(locale.non_hazardous())
            .filter(|w| w.year == year)
            .map(|w| w.value)
            .sum();

        Self {
            year,
            energy_consumption,
            carbon_emissions,
            waste_generation,
            hazardous_waste,
            non_hazardous_waste,
        }
    }

    /// Summarize the most recent year, if the dataset has any records
    pub fn latest(data: &SustainabilityDataset, locale: Locale) -> Option<Self> {
        data.latest_year()
            .map(|year| Self::for_year(data, year, locale))
    }
}
