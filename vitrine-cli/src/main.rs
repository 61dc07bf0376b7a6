mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::Cli;
use shared::AppError;
use std::process::ExitCode;
use vitrine_store::utils::logger;
use vitrine_store::{CatalogStorage, CatalogStore, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = Config::from_env().with_overrides(cli.work_dir.clone(), cli.log_level.clone());
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let path = config.catalog_db_path();
    let storage = match CatalogStorage::open(&path) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to open catalog database");
            eprintln!("✗ {}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };
    let mut store = CatalogStore::open(storage);

    let result = commands::run(cli.command, &mut store, &config).await;
    if store.is_dirty() {
        tracing::warn!("Catalog save failed, retrying before exit");
    }

    if let Err(e) = store.flush() {
        tracing::error!(error = %e, "Catalog changes were not saved");
        eprintln!("✗ Catalog changes were not saved: {e}");
        return ExitCode::FAILURE;
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}
