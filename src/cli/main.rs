//! Command line front end for zip code lookups.
//!
//! Loads a GeoNames postal code file and answers a single query, printing
//! the result as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zipgeo::{DistanceUnit, GeoPoint, ZipRecord, ZipResult, ZipService};

mod config;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "zipgeo")]
#[command(about = "Postal code lookup and distance queries over GeoNames data")]
struct Args {
    /// GeoNames postal code file (tab-separated, optionally .gz)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Distance unit (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    unit: Option<UnitArg>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the record stored for a zip code
    Lookup { zip_code: String },

    /// Distance between two zip codes
    Distance { from: String, to: String },

    /// Distance from a zip code to a coordinate
    DistanceTo {
        zip_code: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Zip codes strictly within a radius of a zip code
    Radius { zip_code: String, radius: f64 },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitArg {
    Km,
    Mi,
}

impl From<UnitArg> for DistanceUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Km => DistanceUnit::Kilometers,
            UnitArg::Mi => DistanceUnit::Miles,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Target<'a> {
    Zip(&'a str),
    Point(GeoPoint),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Response<'a> {
    Record(&'a ZipRecord),
    Distance {
        from: &'a str,
        to: Target<'a>,
        distance: f64,
        unit: DistanceUnit,
    },
    Radius {
        zip_code: &'a str,
        radius: f64,
        unit: DistanceUnit,
        results: Vec<String>,
    },
}

/// Run one query against the loaded dataset
fn execute<'a>(
    service: &'a ZipService,
    command: &'a Command,
    unit: DistanceUnit,
) -> ZipResult<Response<'a>> {
    let response = match command {
        Command::Lookup { zip_code } => Response::Record(service.lookup(zip_code)?),
        Command::Distance { from, to } => Response::Distance {
            from: from.as_str(),
            to: Target::Zip(to.as_str()),
            distance: service.distance(from, to, unit)?,
            unit,
        },
        Command::DistanceTo { zip_code, lat, lon } => {
            let point = GeoPoint::new(*lat, *lon);
            Response::Distance {
                from: zip_code.as_str(),
                to: Target::Point(point),
                distance: service.distance_to_point(zip_code, point, unit)?,
                unit,
            }
        }
        Command::Radius { zip_code, radius } => {
            let mut results = service.zip_codes_within_radius(zip_code, *radius, unit)?;
            results.sort();
            Response::Radius {
                zip_code: zip_code.as_str(),
                radius: *radius,
                unit,
                results,
            }
        }
    };
    Ok(response)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    let settings = config.resolve(args.dataset.clone(), args.unit.map(DistanceUnit::from))?;

    info!("Loading dataset {}", settings.dataset.display());
    let service = ZipService::load(&settings.dataset)
        .with_context(|| format!("Failed to load dataset {}", settings.dataset.display()))?;

    let response = execute(&service, &args.command, settings.unit)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
