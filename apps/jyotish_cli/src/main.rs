use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use jyotish::chart::calculate_chart;
use jyotish::vedic::dashas::MAX_MAHADASHA_COUNT;
use jyotish::vedic::ChartType;
use jyotish::{build_report, BirthData, JyotishConfig, SwissEphemerisAdapter};

/// Cast a sidereal birth chart and print the full report as JSON.
#[derive(Parser, Debug)]
#[command(name = "jyotish", version)]
struct Args {
    /// Birth record (TOML with name, local_datetime, timezone, latitude, longitude).
    #[arg(long)]
    birth: PathBuf,

    /// Engine configuration; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory (overrides the config file).
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,

    /// Comma-separated divisional charts, e.g. D9,D10 (overrides the config file).
    #[arg(long, value_delimiter = ',')]
    vargas: Vec<String>,

    /// Number of Mahadashas to generate (overrides the config file).
    #[arg(long)]
    mahadashas: Option<usize>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn load_birth(path: &Path) -> anyhow::Result<BirthData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read birth record {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid birth record {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => JyotishConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => JyotishConfig::default(),
    };
    if args.ephemeris_path.is_some() {
        config.ephemeris_path = args.ephemeris_path.clone();
    }
    if !args.vargas.is_empty() {
        config.divisional_charts = args
            .vargas
            .iter()
            .map(|v| v.trim().parse::<ChartType>().map_err(anyhow::Error::msg))
            .collect::<anyhow::Result<Vec<_>>>()?;
    }
    if let Some(count) = args.mahadashas {
        if !(1..=MAX_MAHADASHA_COUNT).contains(&count) {
            anyhow::bail!("--mahadashas must be between 1 and {}", MAX_MAHADASHA_COUNT);
        }
        config.mahadasha_count = count;
    }

    let birth = load_birth(&args.birth)?;
    let adapter = SwissEphemerisAdapter::new(config.ephemeris_path.clone(), config.ephemeris.clone())
        .context("Failed to initialize the ephemeris")?;

    let chart = calculate_chart(&birth, &adapter, &config.ephemeris)
        .with_context(|| format!("Failed to cast chart for {}", birth.name))?;
    info!(
        "cast {} with {} ayanamsa {:.6}",
        birth.name, chart.ayanamsa_name, chart.ayanamsa
    );
    let report = build_report(chart, &adapter, &config)?;

    println!("{}", report.to_json(args.pretty)?);
    Ok(())
}
