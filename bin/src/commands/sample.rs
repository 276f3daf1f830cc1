//! Sample command implementation.
//!
//! Reads a tick CSV file, samples bars by the chosen activity measure, and
//! writes the bar series to the chosen output format.

use crate::display::{Format, write_bars};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tickbars_lib::prelude::*;

/// Arguments for the sample command.
pub(crate) struct SampleArgs {
    pub(crate) input: PathBuf,
    pub(crate) bar_type: String,
    pub(crate) threshold: String,
    pub(crate) rounding: Option<i32>,
    pub(crate) ratio: Option<f64>,
    pub(crate) timestamp_col: String,
    pub(crate) price_col: String,
    pub(crate) volume_col: String,
    pub(crate) output: Option<PathBuf>,
    pub(crate) format: Format,
    pub(crate) quiet: bool,
}

/// Sample bars from a tick CSV file.
pub(crate) fn sample(args: SampleArgs) -> Result<()> {
    let bar_type: BarType = args.bar_type.parse()?;

    let threshold = parse_threshold(&args.threshold, args.rounding, args.ratio)?;

    let columns = ColumnSpec::new(&args.timestamp_col, &args.price_col, &args.volume_col);
    let ticks = TickReader::with_columns(columns)
        .read_path(&args.input)
        .with_context(|| format!("Failed to read ticks from {}", args.input.display()))?;

    let sampler = BarSampler::new(bar_type, threshold);
    let bars = sampler.sample(&ticks)?;

    // Determine output path (default to <input stem>_bars.<format>)
    let output = args.output.unwrap_or_else(|| {
        let stem = args
            .input
            .file_stem()
            .map_or_else(|| "ticks".to_string(), |s| s.to_string_lossy().into_owned());
        PathBuf::from(format!("{stem}_bars.{}", args.format.extension()))
    });

    write_bars(&bars, &output, args.format)
        .with_context(|| format!("Failed to write bars to {}", output.display()))?;

    if !args.quiet {
        println!(
            "Sampled {} {} bars from {} ticks -> {}",
            bars.len(),
            bar_type,
            ticks.len(),
            output.display()
        );
    }

    Ok(())
}

/// Parses the threshold option, applying auto-calibration overrides.
fn parse_threshold(
    threshold: &str,
    rounding: Option<i32>,
    ratio: Option<f64>,
) -> Result<Threshold> {
    let parsed: Threshold = threshold.parse()?;

    match parsed {
        Threshold::Auto(mut params) => {
            if let Some(rounding) = rounding {
                params.rounding = rounding;
            }
            if let Some(ratio) = ratio {
                anyhow::ensure!(ratio > 0.0, "--ratio must be positive, got {ratio}");
                params.ratio = ratio;
            }
            Ok(Threshold::Auto(params))
        }
        fixed => {
            anyhow::ensure!(
                rounding.is_none() && ratio.is_none(),
                "--rounding and --ratio only apply to auto thresholds"
            );
            Ok(fixed)
        }
    }
}
