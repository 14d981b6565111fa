//! Ecopanel CLI - Sustainability dashboard in the terminal
//!
//! Reads the dashboard data from an Ecopanel server and asks the advisor
//! questions about it.

mod api;
mod config;
mod display;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::Input;

use api::EcopanelClient;
use config::Config;

#[derive(Parser)]
#[command(name = "ecopanel")]
#[command(about = "Ecopanel CLI - Sustainability dashboard in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Server URL (overrides config and ECOPANEL_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the company profile
    Company,

    /// Company profile and yearly totals
    Overview {
        /// Year to summarize (defaults to the most recent)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show sustainability data tables
    Data {
        /// Which table to show
        #[arg(value_enum, default_value_t = Section::All)]
        section: Section,
    },

    /// List sustainability reports
    Reports,

    /// Ask the sustainability advisor a question
    Ask {
        /// Question (will prompt if not provided)
        question: Option<String>,
    },

    /// Show or update configuration
    Config {
        /// Set the server URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Energy,
    Emissions,
    Waste,
    Suppliers,
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.url;
    let client = || -> Result<EcopanelClient> {
        let config = Config::load()?;
        Ok(EcopanelClient::new(url.as_deref().unwrap_or(&config.base_url)))
    };

    match cli.command {
        Commands::Company => cmd_company(&client()?).await,
        Commands::Overview { year } => cmd_overview(&client()?, year).await,
        Commands::Data { section } => cmd_data(&client()?, section).await,
        Commands::Reports => cmd_reports(&client()?).await,
        Commands::Ask { question } => cmd_ask(&client()?, question).await,
        Commands::Config { base_url } => {
            // A broken file must not block the command that rewrites it
            let (config, error) = Config::load_lenient();
            if let Some(e) = error {
                eprintln!("{} {:#}; using defaults", "Warning:".yellow(), e);
            }
            cmd_config(config, base_url).await
        }
    }
}

// ============================================
// Command Implementations
// ============================================

fn heading(title: &str) {
    println!("\n{}", title.bold().green());
}

async fn cmd_company(client: &EcopanelClient) -> Result<()> {
    let company = client.company().await?;
    heading("Company");
    println!("{}", display::company(&company));
    Ok(())
}

async fn cmd_overview(client: &EcopanelClient, year: Option<i32>) -> Result<()> {
    let company = client.company().await?;
    let summary = client.summary(year).await?;

    heading("Company");
    println!("{}", display::company(&company));
    heading(&format!("Overview {}", summary.year));
    println!("{}", display::summary(&summary));
    Ok(())
}

async fn cmd_data(client: &EcopanelClient, section: Section) -> Result<()> {
    let data = client.sustainability().await?;

    if matches!(section, Section::Energy | Section::All) {
        heading("Energy consumption");
        println!("{}", display::energy(&data));
    }
    if matches!(section, Section::Emissions | Section::All) {
        heading("Carbon emissions");
        println!("{}", display::emissions(&data));
    }
    if matches!(section, Section::Waste | Section::All) {
        heading("Waste generation");
        println!("{}", display::waste(&data));
    }
    if matches!(section, Section::Suppliers | Section::All) {
        heading("Suppliers");
        println!("{}", display::suppliers(&data));
    }
    Ok(())
}

async fn cmd_reports(client: &EcopanelClient) -> Result<()> {
    let data = client.sustainability().await?;

    heading("Reports");
    if data.reports.is_empty() {
        println!("{}", "No reports published.".dimmed());
    } else {
        println!("{}", display::reports(&data.reports));
    }
    Ok(())
}

async fn cmd_ask(client: &EcopanelClient, question: Option<String>) -> Result<()> {
    let question = match question {
        Some(q) => q,
        None => Input::<String>::new()
            .with_prompt("Question")
            .interact_text()
            .context("Failed to read question")?,
    };

    if question.trim().is_empty() {
        bail!("Question cannot be empty");
    }

    let company = client.company().await?;
    let data = client.sustainability().await?;
    let outcome = client.ask(&question, &company, &data).await?;

    println!("\n{}", outcome.answer);
    if outcome.degraded {
        println!(
            "\n{}",
            "The model returned no answer text; this is the fallback reply.".yellow()
        );
    }
    Ok(())
}

async fn cmd_config(mut config: Config, base_url: Option<String>) -> Result<()> {
    if let Some(url) = base_url {
        let url = url.trim_end_matches('/').to_string();

        // Test connection
        let client = EcopanelClient::new(&url);
        print!("Testing connection... ");
        match client.health().await {
            Ok(true) => println!("{}", "OK".green()),
            _ => {
                println!("{}", "Failed".red());
                bail!("Could not reach an Ecopanel server at {}", url);
            }
        }

        config.base_url = url;
        config.save()?;
        println!("{} Saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration".bold());
    println!("  base_url: {}", config.base_url);
    Ok(())
}
