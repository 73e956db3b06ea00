//! CLI argument definitions for the catalog importer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-import",
    version,
    about = "Import product catalogs exported from third-party commerce platforms",
    long_about = "Detect the platform that produced a product CSV, map its columns onto \
                  the canonical product schema and transform its rows into products \
                  with variants and images.\n\n\
                  Supported platforms: Shopify, BASE, STORES."
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
    /// Run the full import and report products, errors and warnings.
    Import(ImportArgs),

    /// Show how well the CSV headers match each known platform.
    Detect(DetectArgs),

    /// Show the column-to-field map that would be used for a CSV.
    Map(MapArgs),

    /// List supported platforms.
    Platforms,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Path to the exported product CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

/// Options deciding which field map is used.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the exported product CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Skip detection and treat the file as coming from this platform.
    #[arg(long = "platform", value_enum)]
    pub platform: Option<PlatformArg>,

    /// JSON field map overlaid on the platform's default map.
    #[arg(long = "mapping", value_name = "JSON")]
    pub mapping: Option<PathBuf>,
}

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the resulting field map as JSON for manual editing.
    #[arg(long = "save", value_name = "JSON")]
    pub save: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Category assigned to products whose row has none.
    #[arg(long = "default-category", default_value = catalog_model::DEFAULT_CATEGORY)]
    pub default_category: String,

    /// Currency of every imported price.
    #[arg(long = "currency", default_value = catalog_model::DEFAULT_CURRENCY)]
    pub currency: String,

    /// Report format printed to stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Also write the full result as JSON to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Shopify,
    Base,
    Stores,
}

impl From<PlatformArg> for catalog_model::PlatformId {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::Shopify => catalog_model::PlatformId::Shopify,
            PlatformArg::Base => catalog_model::PlatformId::Base,
            PlatformArg::Stores => catalog_model::PlatformId::Stores,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
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
