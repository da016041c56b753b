//! Subcommand handlers.
//!
//! Handlers write their results to `out` so tests can capture them; logs go
//! to stderr through the `log` facade.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rasterlab_core::validate::{compute_ratios, exceeds_threshold, slice_rows};
use rasterlab_core::{apply_filter, load, run_and_show, ChannelFilter, Display, PipelineConfig};

use crate::display::{format_shape, TerminalDisplay};

/// Run the full pipeline on `path` and print the result.
pub fn pipeline(path: &Path, config: &PipelineConfig, out: &mut impl Write) -> Result<()> {
    let mut display = TerminalDisplay::new(out);
    run_and_show(path, config, &mut display)
        .with_context(|| format!("{:?} pipeline failed for {}", config.mode, path.display()))?;
    Ok(())
}

/// Load `path` and print the decoded buffer.
pub fn inspect(path: &Path, out: &mut impl Write) -> Result<()> {
    let image = load(path).with_context(|| format!("Failed to load {}", path.display()))?;
    TerminalDisplay::new(out).show(&path.display().to_string(), &image)?;
    Ok(())
}

/// Load `path` and print it once per filter.
pub fn filter(path: &Path, filters: &[ChannelFilter], out: &mut impl Write) -> Result<()> {
    let image = load(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let mut display = TerminalDisplay::new(out);
    for &kind in filters {
        let filtered = apply_filter(&image, kind)
            .with_context(|| format!("{} filter failed", kind.name()))?;
        display.show(kind.name(), &filtered)?;
    }
    info!("applied {} filter(s) to {}", filters.len(), path.display());
    Ok(())
}

/// Print `weight / height²` for each pair, and threshold flags if `limit` is set.
pub fn bmi(
    heights: &[f64],
    weights: &[f64],
    limit: Option<i64>,
    out: &mut impl Write,
) -> Result<()> {
    let ratios = compute_ratios(heights, weights).context("Invalid height/weight lists")?;
    writeln!(out, "{ratios:?}")?;
    if let Some(limit) = limit {
        let flags = exceeds_threshold(&ratios, limit).context("Invalid limit")?;
        writeln!(out, "{flags:?}")?;
    }
    Ok(())
}

/// Print the shape of `rows` before and after slicing, then the slice.
pub fn slice(rows: &[Vec<f64>], start: isize, end: isize, out: &mut impl Write) -> Result<()> {
    let sliced = slice_rows(rows, start, end).context("Invalid rows")?;
    let width = rows.first().map_or(0, Vec::len);
    writeln!(out, "My shape is : {}", format_shape(&[rows.len(), width]))?;
    writeln!(out, "My new shape is : {}", format_shape(&[sliced.len(), 2]))?;
    writeln!(out, "{sliced:?}")?;
    Ok(())
}
