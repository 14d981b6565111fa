//! Prompt Renderer
//!
//! Serializes a PromptQuery into the single instruction string sent to the
//! generative model. Pure: the same query and locale always yield the same
//! bytes. String fields are inserted verbatim, without escaping.

use std::fmt::Write;

use crate::domain::{Locale, PromptQuery};

const ENTRY_DELIMITER: &str = ", ";

/// Fixed wording of the prompt for one locale
struct PromptLabels {
    preamble: &'static str,
    company_header: &'static str,
    company: &'static str,
    industry: &'static str,
    size: &'static str,
    location: &'static str,
    energy: &'static str,
    emissions: &'static str,
    hazardous_waste: &'static str,
    non_hazardous_waste: &'static str,
    suppliers: &'static str,
    question: &'static str,
}

const EN_LABELS: PromptLabels = PromptLabels {
    preamble: "You are a virtual assistant specialized in corporate sustainability.\n\
               Answer briefly, directly and practically, in at most 3 sentences.",
    company_header: "Company data",
    company: "Company",
    industry: "Industry",
    size: "Size",
    location: "Location",
    energy: "Energy consumption",
    emissions: "Carbon emissions",
    hazardous_waste: "Hazardous waste",
    non_hazardous_waste: "Non-hazardous waste",
    suppliers: "Suppliers",
    question: "User question",
};

const PT_BR_LABELS: PromptLabels = PromptLabels {
    preamble: "Você é um assistente virtual especializado em sustentabilidade corporativa.\n\
               Responda de forma breve, direta e prática, com no máximo 3 frases.",
    company_header: "Dados da empresa",
    company: "Empresa",
    industry: "Setor",
    size: "Tamanho",
    location: "Localização",
    energy: "Consumo de energia",
    emissions: "Emissões de carbono",
    hazardous_waste: "Resíduos perigosos",
    non_hazardous_waste: "Resíduos não perigosos",
    suppliers: "Fornecedores",
    question: "Pergunta do usuário",
};

fn labels(locale: Locale) -> &'static PromptLabels {
    match locale {
        Locale::En => &EN_LABELS,
        Locale::PtBr => &PT_BR_LABELS,
    }
}

/// Render the prompt for `query` in `locale`.
///
/// Emission and waste records are partitioned by exact tag equality against
/// the locale's tags; records with any other tag are left out. The prompt
/// always ends with the question exactly as given.
pub fn render_prompt(query: &PromptQuery, locale: Locale) -> String {
    let labels = labels(locale);
    let company = &query.company;
    let data = &query.data;

    let mut prompt = String::new();
    prompt.push_str(labels.preamble);
    prompt.push_str("\n\n");

    let _ = writeln!(prompt, "{}:", labels.company_header);
    let _ = writeln!(prompt, "{}: {}", labels.company, company.name);
    let _ = writeln!(prompt, "{}: {}", labels.industry, company.industry);
    let _ = writeln!(prompt, "{}: {}", labels.size, company.size);
    let _ = writeln!(prompt, "{}: {}", labels.location, company.location);
    prompt.push('\n');

    let energy_label = match data.energy_year_range() {
        Some((first, last)) if first == last => format!("{} ({})", labels.energy, first),
        Some((first, last)) => format!("{} ({}-{})", labels.energy, first, last),
        None => labels.energy.to_string(),
    };
    push_line(
        &mut prompt,
        &energy_label,
        data.energy_consumption
            .iter()
            .map(|e| format!("{}: {} kWh ({})", e.year, e.value, e.source)),
    );

    for scope in [locale.scope_1(), locale.scope_2()] {
        push_line(
            &mut prompt,
            &format!("{} ({})", labels.emissions, scope),
            data.emissions_in_scope(scope)
                .map(|e| format!("{}: {} t", e.year, e.value)),
        );
    }

    for (label, kind) in [
        (labels.hazardous_waste, locale.hazardous()),
        (labels.non_hazardous_waste, locale.non_hazardous()),
    ] {
        push_line(
            &mut prompt,
            label,
            data.waste_of_kind(kind)
                .map(|w| format!("{}: {} t", w.year, w.value)),
        );
    }

    push_line(
        &mut prompt,
        labels.suppliers,
        data.supplier_data.iter().map(|s| {
            format!("{} ({}, {})", s.name, s.sustainability_rating, s.location)
        }),
    );

    prompt.push('\n');
    let _ = write!(prompt, "{}: {}", labels.question, query.question);

    prompt
}

fn push_line(prompt: &mut String, label: &str, entries: impl Iterator<Item = String>) {
    let joined = entries.collect::<Vec<_>>().join(ENTRY_DELIMITER);
    if joined.is_empty() {
        let _ = writeln!(prompt, "{}:", label);
    } else {
        let _ = writeln!(prompt, "{}: {}", label, joined);
    }
}
