#[macro_use]
extern crate tracing;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use actix_web::App;
use actix_web::HttpServer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use expense_lib::config::{Config, RepoBackend};
use expense_repo::transaction_repo::TransactionRepo;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber)?;
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Loading config file");
            Config::from_file(config_path)?
        }
        None => Config::from_env()?,
    };

    let transaction_repo = create_repo(config.repo).await.map_err(|e| {
        error!(error = ?e, "Unable to initialize store");
        e
    })?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func(transaction_repo.clone()))
    })
    .bind(("0.0.0.0", config.port))?;

    info!(port = config.port, "Server is running");
    server.run().await?;

    Ok(())
}

async fn create_repo(backend: RepoBackend) -> Result<Arc<dyn TransactionRepo>, anyhow::Error> {
    match backend {
        RepoBackend::Sqlite => expense_repo::sqlx_repo::create_repo().await,
        RepoBackend::Mem => {
            warn!("Using the non-SQL in-memory store");
            Ok(expense_repo::mem_repo::create_repo())
        }
    }
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
