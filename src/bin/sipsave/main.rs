//! Sipsave CLI

use std::{io, process::ExitCode};

use clap::Parser;
use sipsave::{
    catalog::Catalog,
    feed::{FeedError, seed_from_path},
    report::{self, ReportError},
    sections::{self, Sections},
    shops::GeoPoint,
};
use thiserror::Error;
use tracing::{error, info};

use crate::config::{Cli, Commands, SectionsArgs, ShopArgs};

mod config;
mod logging;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("no coffee shop named {0:?}")]
    ShopNotFound(String),
}

/// Entry point for the `sipsave` CLI.
pub fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        report_startup_error(&error);

        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "sipsave failed");

            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "no subscriber is installed to log through")]
fn report_startup_error(error: &impl std::fmt::Display) {
    eprintln!("failed to initialise logging: {error}");
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut catalog = if cli.catalog.allow_duplicate_names {
        Catalog::allowing_duplicate_names()
    } else {
        Catalog::new()
    };

    let outcome = seed_from_path(&mut catalog, &cli.catalog.feed)?;

    info!(?outcome, shops = catalog.count(), "catalog ready");

    match cli.command {
        Commands::Sections(args) => show_sections(&catalog, args),
        Commands::Shop(args) => show_shop(&catalog, args),
    }
}

fn show_sections(catalog: &Catalog, args: SectionsArgs) -> Result<(), AppError> {
    let mut out = io::stdout().lock();

    match args.search {
        Some(query) => report::write_section(
            &mut out,
            "Search Results",
            "No coffee shops match your search.",
            &sections::search(catalog, &query),
        )?,
        None => report::write_sections(out, &Sections::build(catalog))?,
    }

    Ok(())
}

fn show_shop(catalog: &Catalog, args: ShopArgs) -> Result<(), AppError> {
    let ShopArgs { name, lat, lon } = args;

    let shop = catalog
        .find_by_name(&name)
        .and_then(|key| catalog.get(key))
        .ok_or(AppError::ShopNotFound(name))?;

    let user = lat
        .zip(lon)
        .map(|(latitude, longitude)| GeoPoint::new(latitude, longitude));

    report::write_shop(io::stdout().lock(), shop, user)?;

    Ok(())
}
