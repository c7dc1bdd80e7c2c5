//! CLI argument definitions for the talk reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "talk-recon",
    version,
    about = "Reconcile two conference talk collections into one merged export",
    long_about = "Merge a manually curated (authoritative) and a mechanically \
                  harvested talk collection into one CSV.\n\n\
                  Records for conferences present in both sources are paired by \
                  exact then fuzzy speaker/title matching; date and location are \
                  always taken from the canonical conference table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the two collections and export the merged CSV.
    Merge(MergeArgs),

    /// Print the expected input/output column layout.
    Schema,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Manually curated talk collection (the target side of matching).
    #[arg(long = "authoritative", value_name = "CSV")]
    pub authoritative: PathBuf,

    /// Mechanically harvested talk collection (the search side of matching).
    #[arg(long = "harvested", value_name = "CSV")]
    pub harvested: PathBuf,

    /// Canonical conference table (conference_id, date, location).
    #[arg(long = "conferences", value_name = "CSV")]
    pub conferences: PathBuf,

    /// Merged output CSV.
    #[arg(long = "out", value_name = "CSV")]
    pub out: PathBuf,

    /// Where to write harvested records that could not be paired.
    ///
    /// When omitted, unmatched records are counted but not exported.
    #[arg(long = "unmatched-out", value_name = "CSV")]
    pub unmatched_out: Option<PathBuf>,

    /// Append unmatched records to the merged output instead of keeping
    /// them separate.
    #[arg(long = "fold-unmatched")]
    pub fold_unmatched: bool,
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
