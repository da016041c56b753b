mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rasterlab_core::{ChannelFilter, Mode, PipelineError, ValidationError};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "rasterlab")]
#[command(about = "Grayscale crops of JPEG images with labelled axes")]
struct Cli {
    /// JSON pipeline config; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crop a square window and annotate its gray version
    Zoom(PipelineArgs),
    /// Like zoom, with the gray crop transposed first
    Rotate {
        #[command(flatten)]
        pipeline: PipelineArgs,
        /// Skip the axes and print the bare transposed buffer
        #[arg(long)]
        bare: bool,
    },
    /// Load an image and print its buffer
    Inspect { path: PathBuf },
    /// Apply channel filters to an RGB image
    Filter {
        path: PathBuf,
        /// Filters to apply, in order; all of them when omitted
        #[arg(long, value_enum)]
        kind: Vec<FilterKind>,
    },
    /// Compute weight / height² for paired lists
    Bmi {
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        heights: Vec<f64>,
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        weights: Vec<f64>,
        /// Also report which ratios exceed this limit
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Slice a list of two-value rows
    Slice {
        /// One row as `a,b`; repeat for each row
        #[arg(long = "row", value_parser = parse_row, required = true)]
        rows: Vec<Row>,
        #[arg(long, allow_negative_numbers = true)]
        start: isize,
        #[arg(long, allow_negative_numbers = true)]
        end: isize,
    },
}

#[derive(Args, Debug, Clone)]
struct PipelineArgs {
    path: PathBuf,
    /// Side of the square crop window
    #[arg(long)]
    size: Option<usize>,
    /// Title shown with the result
    #[arg(long)]
    title: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Invert,
    Red,
    Green,
    Blue,
    Grey,
}

impl From<FilterKind> for ChannelFilter {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Invert => ChannelFilter::Invert,
            FilterKind::Red => ChannelFilter::Red,
            FilterKind::Green => ChannelFilter::Green,
            FilterKind::Blue => ChannelFilter::Blue,
            FilterKind::Grey => ChannelFilter::Grey,
        }
    }
}

/// One `--row` value. Length and sign checks happen in the slicer.
#[derive(Debug, Clone, PartialEq)]
struct Row(Vec<f64>);

fn parse_row(s: &str) -> Result<Row, String> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("'{v}' is not a number: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()
        .map(Row)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}: {err:#}", error_kind(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let config_path = cli.config.as_deref();

    match cli.cmd {
        Command::Zoom(args) => {
            let config = config::resolve(config_path, args.overrides(Mode::Zoom))?;
            commands::pipeline(&args.path, &config, &mut stdout)
        }
        Command::Rotate { pipeline, bare } => {
            let mode = if bare { Mode::Transpose } else { Mode::Rotate };
            let config = config::resolve(config_path, pipeline.overrides(mode))?;
            commands::pipeline(&pipeline.path, &config, &mut stdout)
        }
        Command::Inspect { path } => commands::inspect(&path, &mut stdout),
        Command::Filter { path, kind } => {
            let filters: Vec<ChannelFilter> = if kind.is_empty() {
                ChannelFilter::ALL.to_vec()
            } else {
                kind.into_iter().map(ChannelFilter::from).collect()
            };
            commands::filter(&path, &filters, &mut stdout)
        }
        Command::Bmi {
            heights,
            weights,
            limit,
        } => commands::bmi(&heights, &weights, limit, &mut stdout),
        Command::Slice { rows, start, end } => {
            let rows: Vec<Vec<f64>> = rows.into_iter().map(|Row(r)| r).collect();
            commands::slice(&rows, start, end, &mut stdout)
        }
    }
}

impl PipelineArgs {
    fn overrides(&self, mode: Mode) -> Overrides {
        Overrides {
            mode: Some(mode),
            size: self.size,
            title: self.title.clone(),
        }
    }
}

/// Short error class for the final log line.
fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<PipelineError>() {
        e.kind()
    } else if err.downcast_ref::<ValidationError>().is_some() {
        "ValidationError"
    } else {
        "Error"
    }
}
