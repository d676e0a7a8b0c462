mod overrides;
mod render;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cablecost_core::{load_estimate, write_csv, Breakdown, Estimate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::overrides::Overrides;

const ESTIMATE_ENV: &str = "CABLECOST_ESTIMATE";

#[derive(Parser, Debug)]
#[command(author, version, about = "Per-meter cost estimates for power cables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price one meter of cable and print the breakdown
    Estimate(EstimateArgs),
    /// Print a default estimate file to start from
    Template,
    /// List the catalog of allowed construction options
    Catalog,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug, Default)]
struct EstimateArgs {
    /// Estimate file (TOML). Defaults to $CABLECOST_ESTIMATE, then built-in prices
    #[arg(long, short)]
    input: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Also write the CSV report to this file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
    /// Refuse specifications outside the catalog instead of warning
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Template => {
            print!("{}", Estimate::default().to_toml()?);
            Ok(())
        }
        Command::Catalog => {
            println!("{}", render::catalog_table());
            Ok(())
        }
    }
}

fn resolve_input(explicit: Option<PathBuf>) -> Option<PathBuf> {
    dotenvy::dotenv().ok();
    explicit.or_else(|| env::var_os(ESTIMATE_ENV).map(PathBuf::from))
}

fn build_estimate(args: &EstimateArgs, input: Option<PathBuf>) -> Result<Estimate> {
    let mut estimate = match input {
        Some(path) => load_estimate(&path)
            .with_context(|| format!("failed to load estimate file {}", path.display()))?,
        None => {
            info!("No estimate file given; using built-in defaults");
            Estimate::default()
        }
    };

    args.overrides.apply(&mut estimate)?;

    if args.strict {
        estimate
            .ensure_in_catalog()
            .context("specification rejected in strict mode")?;
    } else {
        for issue in estimate.catalog_issues() {
            warn!(%issue, "specification outside the catalog");
        }
    }

    Ok(estimate)
}

fn write_report<W: Write>(
    estimate: &Estimate,
    breakdown: &Breakdown,
    format: OutputFormat,
    mut out: W,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{}",
                render::line_item_table(breakdown, &estimate.currencies)
            )?;
            writeln!(
                out,
                "{}",
                render::summary_table(breakdown, &estimate.currencies)
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, breakdown)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(breakdown, out)?,
    }
    Ok(())
}

fn export_csv(breakdown: &Breakdown, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    write_csv(breakdown, BufWriter::new(file))?;
    info!(path = %path.display(), "CSV report written");
    Ok(())
}

fn handle_estimate(args: EstimateArgs) -> Result<()> {
    let input = resolve_input(args.input.clone());
    let estimate = build_estimate(&args, input)?;
    let breakdown = estimate.evaluate();

    write_report(&estimate, &breakdown, args.format, io::stdout().lock())?;

    if let Some(path) = &args.export {
        export_csv(&breakdown, path)?;
    }

    Ok(())
}
