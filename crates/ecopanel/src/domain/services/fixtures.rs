//! Dashboard fixtures
//!
//! The static company and sustainability data served by the dashboard API.
//! Every call builds a fresh value with identical contents.

use crate::domain::{
    CompanyProfile, EmissionRecord, EnergyRecord, Locale, ReportMetadata, SupplierRecord,
    SustainabilityDataset, WasteRecord,
};

const YEARS: [i32; 4] = [2020, 2021, 2022, 2023];
const ENERGY_KWH: [f64; 4] = [1200.0, 1300.0, 1100.0, 900.0];
const SCOPE_1_T: [f64; 4] = [600.0, 650.0, 550.0, 400.0];
const SCOPE_2_T: [f64; 4] = [300.0, 320.0, 280.0, 200.0];
const HAZARDOUS_T: [f64; 4] = [250.0, 270.0, 240.0, 200.0];
const NON_HAZARDOUS_T: [f64; 4] = [400.0, 420.0, 380.0, 350.0];

/// Company profile for `locale`
pub fn company_profile(locale: Locale) -> CompanyProfile {
    match locale {
        Locale::En => CompanyProfile::new("ACME Corp", "Manufacturing", "Large", "São Paulo, Brazil"),
        Locale::PtBr => CompanyProfile::new("ACME Corp", "Fabricação", "Grande", "São Paulo, Brasil"),
    }
}

/// Sustainability dataset for `locale`
pub fn sustainability_dataset(locale: Locale) -> SustainabilityDataset {
    let (grid, renewable) = match locale {
        Locale::En => ("Grid", "Renewable"),
        Locale::PtBr => ("Rede", "Renovável"),
    };

    let energy_consumption = YEARS
        .iter()
        .zip(ENERGY_KWH)
        .map(|(&year, value)| EnergyRecord {
            year,
            value,
            // The last year switched to renewable supply
            source: (if year == YEARS[3] { renewable } else { grid }).to_string(),
        })
        .collect();

    let carbon_emissions = series(&SCOPE_1_T, locale.scope_1())
        .chain(series(&SCOPE_2_T, locale.scope_2()))
        .map(|(year, value, scope)| EmissionRecord { year, value, scope })
        .collect();

    let waste_generation = series(&HAZARDOUS_T, locale.hazardous())
        .chain(series(&NON_HAZARDOUS_T, locale.non_hazardous()))
        .map(|(year, value, kind)| WasteRecord { year, value, kind })
        .collect();

    SustainabilityDataset {
        energy_consumption,
        carbon_emissions,
        waste_generation,
        supplier_data: suppliers(locale),
        reports: reports(locale),
    }
}

fn series<'a>(
    values: &'a [f64; 4],
    tag: &'a str,
) -> impl Iterator<Item = (i32, f64, String)> + 'a {
    YEARS
        .iter()
        .zip(values.iter())
        .map(move |(&year, &value)| (year, value, tag.to_string()))
}

fn suppliers(locale: Locale) -> Vec<SupplierRecord> {
    let rows: [(&str, &str, &str); 3] = match locale {
        Locale::En => [
            ("Supplier A", "Medium", "China"),
            ("Supplier B", "High", "Brazil"),
            ("Supplier C", "Low", "USA"),
        ],
        Locale::PtBr => [
            ("Fornecedor A", "Médio", "China"),
            ("Fornecedor B", "Alto", "Brasil"),
            ("Fornecedor C", "Baixo", "EUA"),
        ],
    };

    rows.iter()
        .map(|(name, rating, location)| SupplierRecord {
            name: name.to_string(),
            sustainability_rating: rating.to_string(),
            location: location.to_string(),
        })
        .collect()
}

fn reports(locale: Locale) -> Vec<ReportMetadata> {
    let rows: [(&str, &str, &str, &str); 2] = match locale {
        Locale::En => [
            ("report-1", "Sustainability Report 2022", "2023-03-15", "Comprehensive"),
            ("report-2", "Carbon Footprint Analysis", "2023-02-20", "Specific"),
        ],
        Locale::PtBr => [
            ("report-1", "Relatório de Sustentabilidade 2022", "2023-03-15", "Abrangente"),
            ("report-2", "Análise da Pegada de Carbono", "2023-02-20", "Específico"),
        ],
    };

    rows.iter()
        .map(|(id, title, date, kind)| ReportMetadata {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}
