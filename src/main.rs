use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use egypt_rent::config::{init_tracing, Config};
use egypt_rent::report::{render_commercial, render_residential, render_tables};
use egypt_rent::{compute_commercial_rent, compute_residential_rent, CommercialRequest, ResidentialRequest};

#[derive(Parser)]
#[command(name = "rent", version, about = "Egyptian old-rent law calculator")]
struct Cli {
    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Residential lease: category multiplier, minimum and yearly increases
    Residential {
        #[arg(long)]
        rent: f64,
        /// economic | medium | premium
        #[arg(long)]
        category: String,
        /// Evaluation date (YYYY-MM-DD); defaults to RENT_AS_OF or today
        #[arg(long)]
        as_of: Option<NaiveDate>,
        /// Lease contract date, on or before 1996-01-30
        #[arg(long)]
        contract_date: Option<NaiveDate>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Commercial lease with the full increase schedule
    Commercial {
        #[arg(long)]
        rent: f64,
        /// before-1944 | 1944-1961 | 1961-1973 | 1973-1977 | after-1977
        #[arg(long)]
        period: String,
        #[arg(long)]
        contract_date: NaiveDate,
        #[arg(long)]
        as_of: Option<NaiveDate>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// List categories and construction periods
    Periods,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let today = config.today();

    match cli.command {
        Command::Residential {
            rent,
            category,
            as_of,
            contract_date,
            notes,
        } => {
            let input = ResidentialRequest {
                original_rent: Some(rent),
                category: Some(category),
                as_of,
                contract_date,
                notes,
            }
            .into_input(today)?;
            info!(as_of = %input.as_of, "calculating residential rent");

            let result = compute_residential_rent(&input)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).context("Failed to serialize result")?
                );
            } else {
                print!("{}", render_residential(&result));
            }
        }
        Command::Commercial {
            rent,
            period,
            contract_date,
            as_of,
            notes,
        } => {
            let input = CommercialRequest {
                original_rent: Some(rent),
                construction_period: Some(period),
                contract_date: Some(contract_date),
                as_of,
                notes,
            }
            .into_input(today)?;
            info!(as_of = %input.as_of, "calculating commercial rent");

            let result = compute_commercial_rent(&input)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).context("Failed to serialize result")?
                );
            } else {
                print!("{}", render_commercial(&result));
            }
        }
        Command::Periods => print!("{}", render_tables()),
    }

    Ok(())
}
