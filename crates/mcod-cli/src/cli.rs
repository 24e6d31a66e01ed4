//! CLI argument definitions for `mcod`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mcod_model::{OtherCause, SuicideMethod, Urbanicity};

#[derive(Parser)]
#[command(
    name = "mcod",
    version,
    about = "Classify Multiple Cause of Death records by cause",
    long_about = "Classify Multiple Cause of Death (MCOD) records into suicides, suicide \
                  methods and other causes across the ICD-8, ICD-9 and ICD-10 eras.\n\n\
                  Also computes indexed and age-standardized rates."
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

    /// Cause catalog asset to use instead of the built-in one
    /// (default: $MCOD_CATALOG, then built-in).
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Keep suicides, optionally of one method.
    Suicide(SuicideArgs),

    /// Keep records of a non-suicide cause.
    Other(OtherArgs),

    /// List the cause catalogs and the asset fingerprint.
    Catalogs,

    /// Append RUCC and urbanicity columns, or keep one urbanicity class.
    Urbanicity(UrbanicityArgs),

    /// Index a rate series to its earliest year.
    Index(IndexArgs),

    /// Compute crude and age-standardized rates.
    Standardize(StandardizeArgs),
}

/// Batch input shared by the classification commands.
#[derive(Args)]
pub struct BatchArgs {
    /// MCOD batch (CSV with a header row).
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,

    /// Data year (default: resolved from the `Year` column).
    #[arg(long = "year")]
    pub year: Option<i64>,

    /// Output CSV (default: stdout).
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SuicideArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Keep only suicides by this method.
    #[arg(long = "method", value_enum)]
    pub method: Option<MethodArg>,

    /// Print a table of records per method instead of writing a batch.
    #[arg(long = "counts", conflicts_with_all = ["method", "output"])]
    pub counts: bool,

    /// Scan only the record axes (RA1-RA20) for methods.
    #[arg(long = "record-axes-only")]
    pub record_axes_only: bool,
}

#[derive(Args)]
pub struct OtherArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    #[arg(long = "cause", value_enum)]
    pub cause: CauseArg,
}

#[derive(Args)]
pub struct UrbanicityArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Keep only this class instead of appending columns.
    #[arg(long = "class", value_enum)]
    pub class: Option<UrbanicityArg>,

    /// Directory holding the RUCC tables (default: $MCOD_RUCC_DIR).
    #[arg(long = "rucc-dir", value_name = "DIR")]
    pub rucc_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Rate series (CSV with a header row).
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,

    #[arg(long = "rate-column", value_name = "COLUMN")]
    pub rate_column: String,

    #[arg(long = "year-column", value_name = "COLUMN", default_value = "Year")]
    pub year_column: String,

    /// Output CSV (default: stdout).
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct StandardizeArgs {
    /// Deaths, one row per record (CSV with a header row).
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,

    /// Population per age group (CSV with a header row).
    #[arg(long = "population", value_name = "CSV")]
    pub population: PathBuf,

    #[arg(long = "age-column", value_name = "COLUMN", default_value = "Age_Number")]
    pub age_column: String,

    #[arg(long = "age-group-column", value_name = "COLUMN", default_value = "Age_Group")]
    pub age_group_column: String,

    #[arg(long = "population-column", value_name = "COLUMN", default_value = "Population")]
    pub population_column: String,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Firearms,
    Poisoning,
    Hanging,
    Other,
}

impl From<MethodArg> for SuicideMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Firearms => SuicideMethod::FirearmsExplosives,
            MethodArg::Poisoning => SuicideMethod::Poisoning,
            MethodArg::Hanging => SuicideMethod::Hanging,
            MethodArg::Other => SuicideMethod::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CauseArg {
    HeartAttack,
    Homicide,
    MotorVehicle,
    Overdose,
}

impl From<CauseArg> for OtherCause {
    fn from(arg: CauseArg) -> Self {
        match arg {
            CauseArg::HeartAttack => OtherCause::HeartAttack,
            CauseArg::Homicide => OtherCause::Homicide,
            CauseArg::MotorVehicle => OtherCause::MotorVehicleAccident,
            CauseArg::Overdose => OtherCause::Overdose,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UrbanicityArg {
    Urban,
    Metro,
    Rural,
}

impl From<UrbanicityArg> for Urbanicity {
    fn from(arg: UrbanicityArg) -> Self {
        match arg {
            UrbanicityArg::Urban => Urbanicity::Urban,
            UrbanicityArg::Metro => Urbanicity::Metro,
            UrbanicityArg::Rural => Urbanicity::Rural,
        }
    }
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
