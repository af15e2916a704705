//! Command Line Config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Shop feed file (JSON or YAML)
    #[arg(
        long,
        env = "SIPSAVE_FEED",
        default_value = "fixtures/shops/jakarta.json",
        global = true
    )]
    pub feed: PathBuf,

    /// Keep shops that share a display name instead of skipping them
    #[arg(long, env = "SIPSAVE_ALLOW_DUPLICATE_NAMES", default_value_t = false, global = true)]
    pub allow_duplicate_names: bool,
}

#[derive(Debug, Parser)]
#[command(name = "sipsave", about = "Coffee shop promo explorer", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub catalog: CatalogConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the storefront sections
    Sections(SectionsArgs),

    /// Show one shop's promos and menu
    Shop(ShopArgs),
}

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Only list shops whose name or location contains this text
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShopArgs {
    /// Shop display name
    pub name: String,

    /// Your latitude, for live walking estimates
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Your longitude, for live walking estimates
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}
