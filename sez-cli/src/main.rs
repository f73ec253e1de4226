//! Command-line front end for the ECEF to SEZ transform.
//!
//! Takes the ECEF origin of the SEZ frame and an ECEF target, all in kilometres,
//! and prints the south, east and zenith components one per line.

use clap::{Parser, ValueEnum};
use sez_core::{EcefPoint, SezError, SezVector, sez_from_ecef_with_solution};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "Usage: ecef-to-sez o_x_km o_y_km o_z_km x_km y_km z_km";

/// ECEF to SEZ converter
#[derive(Parser, Debug)]
#[command(name = "ecef-to-sez")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Convert an ECEF position to SEZ coordinates relative to an ECEF origin",
    long_about = None
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// o_x_km o_y_km o_z_km x_km y_km z_km (options must come first)
    #[arg(value_name = "KM", allow_hyphen_values = true)]
    values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// s, e and z on separate lines
    Plain,
    /// A single JSON object
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (origin, target) = match parse_points(&cli.values) {
        Ok(points) => points,
        Err(SezError::InvalidInput(reason)) => {
            debug!(%reason, "not running transform");
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let (sez, solution) = sez_from_ecef_with_solution(origin, target);
    debug!(
        lat_deg = solution.lat_deg(),
        lon_deg = solution.lon_deg(),
        hae_km = solution.hae_km,
        iterations = solution.iterations,
        "SEZ origin"
    );

    println!("{}", render(&sez, cli.format)?);
    Ok(())
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Split six positional tokens into origin and target points
fn parse_points(values: &[String]) -> sez_core::Result<(EcefPoint, EcefPoint)> {
    if values.len() != 6 {
        return Err(SezError::InvalidInput(format!(
            "expected 6 coordinates, got {}",
            values.len()
        )));
    }

    let km = values
        .iter()
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|e| SezError::Parse(format!("'{token}': {e}")))
        })
        .collect::<sez_core::Result<Vec<f64>>>()?;

    let origin = EcefPoint::try_new(km[0], km[1], km[2])?;
    let target = EcefPoint::try_new(km[3], km[4], km[5])?;
    Ok((origin, target))
}

fn render(sez: &SezVector, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(format!("{}\n{}\n{}", sez.s_km, sez.e_km, sez.z_km)),
        OutputFormat::Json => serde_json::to_string(sez),
    }
}
