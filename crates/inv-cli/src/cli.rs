//! CLI argument definitions for the inventory generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use inv_model::{ItemType, SyncMode};

#[derive(Parser)]
#[command(
    name = "inv",
    version,
    about = "Inventory preset generator - allocate shared state values for toggles",
    long_about = "Allocate the shared 8-bit state channel for an inventory preset.\n\n\
                  Reads a preset as JSON, validates it, assigns state values to\n\
                  toggles, groups and buttons, and prints the per-toggle transition table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Allocate state values and print the transition table.
    Generate(GenerateArgs),

    /// Validate a preset and report its state budget.
    Check(CheckArgs),

    /// List the toggles and buttons a preset flattens to.
    Items(ItemsArgs),
}

#[derive(Parser)]
pub struct PresetArgs {
    /// Path to the preset JSON file.
    #[arg(value_name = "PRESET")]
    pub preset: PathBuf,
}

#[derive(Parser)]
pub struct ItemsArgs {
    #[command(flatten)]
    pub input: PresetArgs,

    /// Only list toggles with this sync mode (off, manual, auto).
    #[arg(long = "sync", value_name = "MODE")]
    pub sync: Option<SyncMode>,

    /// Only list entries of this kind (toggle, button).
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: Option<ItemType>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: PresetArgs,

    /// Print the full generation as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Print the table as plain text.
    #[arg(long = "plain", conflicts_with = "json")]
    pub plain: bool,

    /// Allocate even if validation reports errors.
    ///
    /// Corrupt group members and budget overflow still abort; this only
    /// skips the structural checks (page limits, missing subpages).
    #[arg(long = "allow-invalid")]
    pub allow_invalid: bool,

    /// Treat validation warnings as errors.
    #[arg(long = "strict", conflicts_with = "allow_invalid")]
    pub strict: bool,

    /// Maximum items on one menu page.
    #[arg(long = "page-item-limit", value_name = "N")]
    pub page_item_limit: Option<usize>,
}

#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: PresetArgs,

    /// Treat validation warnings as errors.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Maximum items on one menu page.
    #[arg(long = "page-item-limit", value_name = "N")]
    pub page_item_limit: Option<usize>,
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
