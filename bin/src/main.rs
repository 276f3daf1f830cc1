//! tickbars CLI - Information-driven OHLC bar sampling from tick data.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tickbars")]
#[command(about = "Sample tick, volume, and dollar bars from trade tick data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress summary output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample bars from a tick CSV file
    Sample {
        /// Input CSV file with tick data
        input: PathBuf,

        /// Bar type: tick, volume, or dollar
        #[arg(short, long, default_value = "tick")]
        bar_type: String,

        /// Sampling threshold: "auto" or a positive number
        #[arg(short, long, default_value = "auto")]
        threshold: String,

        /// Auto threshold rounding magnitude (-2 rounds to the nearest hundred)
        #[arg(long)]
        rounding: Option<i32>,

        /// Auto threshold ratio of mean daily activity
        #[arg(long)]
        ratio: Option<f64>,

        /// Name of the timestamp column
        #[arg(long, default_value = "timestamp")]
        timestamp_col: String,

        /// Name of the price column
        #[arg(long, default_value = "price")]
        price_col: String,

        /// Name of the volume column
        #[arg(long, default_value = "volume")]
        volume_col: String,

        /// Output file path. Defaults to <input stem>_bars.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// List supported bar types
    BarTypes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Sample {
            input,
            bar_type,
            threshold,
            rounding,
            ratio,
            timestamp_col,
            price_col,
            volume_col,
            output,
            format,
        } => commands::sample::sample(commands::sample::SampleArgs {
            input,
            bar_type,
            threshold,
            rounding,
            ratio,
            timestamp_col,
            price_col,
            volume_col,
            output,
            format,
            quiet: cli.quiet,
        }),
        Commands::BarTypes => commands::bar_types::list_bar_types(),
    }
}

/// Initializes the tracing subscriber from the -v flags (RUST_LOG wins).
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
