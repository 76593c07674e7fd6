//! Ladder CLI — compute and export price ladders.
//!
//! Commands:
//! - `compute` — build a ladder from a starting price, direction and optional risk profile
//! - `profiles` — list risk profiles with their index overrides and scaling
//! - `config` — print the default configuration as TOML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::info;

use ladder_core::{
    build_ladder, export_csv, export_json, Direction, LadderConfig, LadderRequest, LadderTable,
    RiskProfile, SizingMode,
};

#[derive(Parser)]
#[command(name = "ladder", about = "Ladder CLI — price ladder and position sizing calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a ladder and print it.
    Compute {
        /// Starting price (e.g., 2700.00).
        #[arg(long)]
        price: Decimal,

        /// Direction away from the starting price: falling or rising.
        #[arg(long, default_value = "falling")]
        direction: String,

        /// Risk profile. Omit for baseline distance sizing.
        #[arg(long)]
        profile: Option<String>,

        /// Path to a TOML config file. Defaults to the built-in constants.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List risk profiles.
    Profiles,
    /// Print the default configuration as TOML.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            price,
            direction,
            profile,
            config,
            format,
            output,
        } => run_compute(price, &direction, profile.as_deref(), config.as_deref(), format, output),
        Commands::Profiles => run_profiles(),
        Commands::Config => run_config(),
    }
}

/// Logs go to stderr so CSV/JSON on stdout stay machine-readable.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ladder_core=info,ladder=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_compute(
    price: Decimal,
    direction: &str,
    profile: Option<&str>,
    config_path: Option<&Path>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let direction: Direction = direction.parse()?;
    let profile: Option<RiskProfile> = profile.map(str::parse).transpose()?;
    let config = match config_path {
        Some(path) => LadderConfig::from_file(path)?,
        None => LadderConfig::default(),
    };

    let request = LadderRequest::new(price, direction, SizingMode::from(profile))?;
    let table = build_ladder(&request, &config)?;
    info!(
        mode = %request.mode,
        rows = table.len(),
        fingerprint = table.fingerprint().short(),
        "ladder computed"
    );

    let rendered = match format {
        OutputFormat::Table => render_table(&table),
        OutputFormat::Csv => export_csv(&table)?,
        OutputFormat::Json => export_json(&table)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Ladder saved to: {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_table(table: &LadderTable) -> String {
    let request = table.request();
    let mut out = String::new();

    out.push_str(&format!(
        "Ladder: start {} | {} | {} | step {} | span {}\n\n",
        request.starting_price,
        request.direction,
        request.mode,
        table.config().step,
        table.config().total_span,
    ));
    out.push_str(&format!(
        "{:>3} {:>10} {:>8} {:>9} {:>10} {:>12} {:>9} {:>10} {:>12}\n",
        "#", "Price", "Lot", "Cum Lot", "BreakEven", "Floating", "Exit", "ToTarget", "Reversal"
    ));
    out.push_str(&format!("{}\n", "─".repeat(93)));

    for r in table.rounded() {
        out.push_str(&format!(
            "{:>3} {:>10.2} {:>8.4} {:>9.4} {:>10.2} {:>12.2} {:>9.2} {:>10.2} {:>12.2}\n",
            r.index,
            r.price,
            r.lot,
            r.cumulative_lot,
            r.break_even,
            r.floating_pnl,
            r.exit_distance,
            r.gain_to_target,
            r.reversal_gain,
        ));
    }

    out.push_str(&format!(
        "\nTotal lot: {}  Fingerprint: {}\n",
        table.total_lot().round_dp(4),
        table.fingerprint().short()
    ));
    out
}

fn run_profiles() -> Result<()> {
    println!("{:<18} {:>8} {:>8}  Scaling", "Profile", "Index 5", "Index 7");
    println!("{}", "─".repeat(56));
    for profile in RiskProfile::ALL {
        let lot_at = |i| profile.index_override(i).unwrap_or(Decimal::ZERO);
        println!(
            "{:<18} {:>8} {:>8}  {}",
            profile.name(),
            lot_at(5),
            lot_at(7),
            profile.scaling()
        );
    }
    println!("\nWithout --profile: baseline distance table, lot / lot_divisor");
    Ok(())
}

fn run_config() -> Result<()> {
    let toml = LadderConfig::default().to_toml()?;
    print!("{toml}");
    Ok(())
}
