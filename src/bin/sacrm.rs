//! SACRM command line: rate companies from a CSV file
//!
//! Examples:
//!   sacrm template --output companies.csv
//!   sacrm rate --input companies.csv --company "Sample Corp"
//!   sacrm batch --input companies.csv --output ratings.csv
//!   sacrm pd-curve --from 40 --to 95 --points 12

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use sacrm::profile::{find_company, load_profiles, write_template};
use sacrm::scoring::pd;
use sacrm::{RatedCompany, RatingEngine, ReferenceTables};

#[derive(Parser)]
#[command(name = "sacrm", version, about = "Strategix Africa Credit Rating Model")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rate one company (or every company) and print the results
    Rate {
        /// Input CSV with one company per row
        #[arg(short, long)]
        input: PathBuf,

        /// Only rate the company with this exact name
        #[arg(short, long)]
        company: Option<String>,

        /// JSON file with country/sector score overrides
        #[arg(long)]
        tables: Option<PathBuf>,

        /// Print JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },

    /// Rate every company and write one CSV row per company
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "ratings.csv")]
        output: PathBuf,

        #[arg(long)]
        tables: Option<PathBuf>,
    },

    /// Write a sample input CSV
    Template {
        /// Destination file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the 1-year PD curve
    PdCurve {
        #[arg(long, default_value_t = 40.0)]
        from: f64,

        #[arg(long, default_value_t = 95.0)]
        to: f64,

        #[arg(long, default_value_t = 50)]
        points: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Rate { input, company, tables, json } => {
            rate(&input, company.as_deref(), tables.as_deref(), json)
        }
        Command::Batch { input, output, tables } => batch(&input, &output, tables.as_deref()),
        Command::Template { output } => template(output.as_deref()),
        Command::PdCurve { from, to, points } => {
            pd_curve(from, to, points);
            Ok(())
        }
    }
}

fn load_tables(path: Option<&Path>) -> Result<ReferenceTables> {
    match path {
        Some(path) => ReferenceTables::from_overrides_file(path)
            .with_context(|| format!("Failed to load table overrides from {}", path.display())),
        None => Ok(ReferenceTables::default()),
    }
}

fn rate(input: &Path, company: Option<&str>, tables: Option<&Path>, json: bool) -> Result<()> {
    let tables = load_tables(tables)?;
    let engine = RatingEngine::new(&tables);
    let profiles = load_profiles(input)
        .with_context(|| format!("Failed to load profiles from {}", input.display()))?;

    let rated: Vec<RatedCompany> = match company {
        Some(name) => vec![engine.rate_company(find_company(&profiles, name)?)],
        None => engine.rate_all(&profiles),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rated)?);
    } else {
        print_summary(&rated);
    }
    Ok(())
}

fn print_summary(rated: &[RatedCompany]) {
    println!(
        "{:<28} {:<14} {:>6} {:>6} {:>6} {:>6} {:>6} {:>9} {:<5} {:>7} {:>7}",
        "Company", "Country", "CRS", "FSS", "OCBS", "BRS", "SSS", "Composite", "Grade", "PD1Y%", "PD3Y%"
    );
    for company in rated {
        let r = &company.rating;
        println!(
            "{:<28} {:<14} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>9.1} {:<5} {:>7.2} {:>7.2}",
            company.company_name,
            company.country,
            r.sovereign,
            r.financial_strength,
            r.financier_behavior,
            r.alt_data,
            r.stress,
            r.composite,
            r.grade,
            r.pd_1y,
            r.pd_3y,
        );
    }
}

fn batch(input: &Path, output: &Path, tables: Option<&Path>) -> Result<()> {
    let start = Instant::now();
    let tables = load_tables(tables)?;
    let engine = RatingEngine::new(&tables);
    let profiles = load_profiles(input)
        .with_context(|| format!("Failed to load profiles from {}", input.display()))?;

    let rated = engine.rate_all(&profiles);

    let mut wtr = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    for company in &rated {
        wtr.serialize(company.to_row())?;
    }
    wtr.flush()?;

    log::info!(
        "Rated {} companies into {} in {:?}",
        rated.len(),
        output.display(),
        start.elapsed()
    );
    Ok(())
}

fn template(output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_template(file)?;
            log::info!("Template written to {}", path.display());
        }
        None => write_template(io::stdout().lock())?,
    }
    Ok(())
}

fn pd_curve(from: f64, to: f64, points: usize) {
    println!("{:<8} {:<10}", "Score", "PD1Y%");
    for (score, pd_1y) in pd::curve(from, to, points) {
        println!("{:<8.2} {:<10.4}", score, pd_1y);
    }
}
