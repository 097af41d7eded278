//! CLI argument definitions for the roster validator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster validator - Check bulk user uploads before they are provisioned",
    long_about = "Validate roster files (CSV or JSON) and single user submissions.\n\n\
                  Reports missing headers, per-user rule violations and sites\n\
                  referenced by the upload. Exits with status 1 when validation fails."
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

    /// Allow roster cell values (names, ids, sites) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with upload and validation defaults.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a bulk add-users upload (headers, rows and sites).
    Upload(UploadArgs),

    /// Validate roster rows against the add or link rules only.
    Validate(ValidateArgs),

    /// Validate a single add-user submission (JSON object).
    Submit(SubmitArgs),

    /// Check that a roster file carries the given headers.
    Headers(HeadersArgs),
}

#[derive(Parser)]
pub struct UploadArgs {
    /// Roster file (.csv, or .json holding an array of row objects).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sites come from the uploader's permissions; skip site requirements.
    #[arg(long = "site-from-permissions")]
    pub site_from_permissions: bool,

    /// Date the child age rule is evaluated on (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Roster file (.csv or .json).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rule set to apply to each row.
    #[arg(long = "profile", value_enum)]
    pub profile: ProfileArg,

    /// Date the child age rule is evaluated on (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// JSON file holding one submission object.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Date the child age rule is evaluated on (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// Roster file (.csv or .json).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Comma-separated headers that must be present.
    #[arg(long = "require", value_name = "HEADERS", value_delimiter = ',', required = true)]
    pub require: Vec<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

/// Row rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Add,
    Link,
}

/// How results are printed to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
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
