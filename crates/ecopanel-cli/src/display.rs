//! Terminal rendering of dashboard data
//!
//! Plain text only; callers add color to headings.

use ecopanel::{CompanyProfile, DatasetSummary, ReportMetadata, SustainabilityDataset};

/// Left-aligned table with a dashed rule under the header
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }

    lines.join("\n")
}

pub fn company(company: &CompanyProfile) -> String {
    table(
        &["Field", "Value"],
        &[
            vec!["Company".to_string(), company.name.clone()],
            vec!["Industry".to_string(), company.industry.clone()],
            vec!["Size".to_string(), company.size.clone()],
            vec!["Location".to_string(), company.location.clone()],
        ],
    )
}

pub fn summary(summary: &DatasetSummary) -> String {
    let year = summary.year;
    table(
        &["Metric", "Value"],
        &[
            vec![
                format!("Total energy consumption ({})", year),
                format!("{} kWh", summary.energy_consumption),
            ],
            vec![
                format!("Total carbon emissions ({})", year),
                format!("{} t CO2", summary.carbon_emissions),
            ],
            vec![
                format!("Total waste generated ({})", year),
                format!("{} t", summary.waste_generation),
            ],
            vec![
                "  Hazardous".to_string(),
                format!("{} t", summary.hazardous_waste),
            ],
            vec![
                "  Non-hazardous".to_string(),
                format!("{} t", summary.non_hazardous_waste),
            ],
        ],
    )
}

pub fn energy(data: &SustainabilityDataset) -> String {
    let rows: Vec<Vec<String>> = data
        .energy_consumption
        .iter()
        .map(|e| vec![e.year.to_string(), e.value.to_string(), e.source.clone()])
        .collect();
    table(&["Year", "Value (kWh)", "Source"], &rows)
}

pub fn emissions(data: &SustainabilityDataset) -> String {
    let rows: Vec<Vec<String>> = data
        .carbon_emissions
        .iter()
        .map(|e| vec![e.year.to_string(), e.value.to_string(), e.scope.clone()])
        .collect();
    table(&["Year", "Value (t CO2)", "Scope"], &rows)
}

pub fn waste(data: &SustainabilityDataset) -> String {
    let rows: Vec<Vec<String>> = data
        .waste_generation
        .iter()
        .map(|w| vec![w.year.to_string(), w.value.to_string(), w.kind.clone()])
        .collect();
    table(&["Year", "Value (t)", "Type"], &rows)
}

pub fn suppliers(data: &SustainabilityDataset) -> String {
    let rows: Vec<Vec<String>> = data
        .supplier_data
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.sustainability_rating.clone(),
                s.location.clone(),
            ]
        })
        .collect();
    table(&["Supplier", "Rating", "Location"], &rows)
}

pub fn reports(reports: &[ReportMetadata]) -> String {
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| vec![r.date.clone(), r.title.clone(), r.kind.clone()])
        .collect();
    table(&["Date", "Title", "Type"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecopanel::{fixtures, Locale};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_alignment() {
        let rendered = table(
            &["Year", "Source"],
            &[
                vec!["2020".to_string(), "Grid".to_string()],
                vec!["2023".to_string(), "Renovável".to_string()],
            ],
        );
        let expected = "\
Year  Source
----  ---------
2020  Grid
2023  Renovável";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_energy_table_drops_fraction_of_whole_numbers() {
        let rendered = energy(&fixtures::sustainability_dataset(Locale::En));
        assert!(rendered.contains("2023  900          Renewable"));
    }

    #[test]
    fn test_summary_units() {
        let data = fixtures::sustainability_dataset(Locale::En);
        let rendered = summary(&DatasetSummary::for_year(&data, 2023, Locale::En));
        assert!(rendered.contains("600 t CO2"));
        assert!(rendered.contains("900 kWh"));
    }

    #[test]
    fn test_reports_list() {
        let data = fixtures::sustainability_dataset(Locale::En);
        let rendered = reports(&data.reports);
        assert!(rendered.contains("2023-03-15  Sustainability Report 2022"));
    }
}
