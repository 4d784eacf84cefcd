//! CLI argument definitions for the QTc calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qtc",
    version,
    about = "QTc calculator - correct the QT interval for heart rate",
    long_about = "Correct a measured QT interval for heart rate using several published formulas.\n\n\
                  Narrow QRS: Bazett, Fridericia, Framingham, Hodges, Rautaharju.\n\
                  Wide QRS: Bogossian (modified QT + Fridericia) and Rautaharju wide-QRS.\n\
                  Results are advisory and do not replace clinical judgement."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Correct QT for a narrow-QRS rhythm.
    Narrow(NarrowArgs),

    /// Correct QT for a wide-QRS rhythm (needs QRS duration and sex).
    Wide(WideArgs),

    /// List the supported formulas.
    Formulas,
}

/// Measurements shared by both modes.
///
/// Values are taken as text so blank or non-numeric input is reported by
/// the validator with the same messages as any other front end.
#[derive(Args)]
pub struct MeasurementArgs {
    /// Heart rate in beats per minute.
    #[arg(
        long = "heart-rate",
        visible_alias = "hr",
        value_name = "BPM",
        allow_hyphen_values = true
    )]
    pub heart_rate: Option<String>,

    /// QT interval in milliseconds.
    #[arg(long = "qt", value_name = "MS", allow_hyphen_values = true)]
    pub qt_interval: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct NarrowArgs {
    #[command(flatten)]
    pub measurements: MeasurementArgs,
}

#[derive(Parser)]
pub struct WideArgs {
    #[command(flatten)]
    pub measurements: MeasurementArgs,

    /// QRS duration in milliseconds.
    #[arg(long = "qrs", value_name = "MS", allow_hyphen_values = true)]
    pub qrs_duration: Option<String>,

    /// Patient sex (male or female).
    #[arg(long = "sex", value_name = "SEX")]
    pub sex: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
