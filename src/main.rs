#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod http_handler;
mod keychain;
mod launch_ingest;
mod launch_registry;
mod logger;
mod persistence;
mod planet_catalog;
mod routes;

use crate::config::Config;
use crate::http_handler::HTTPClient;
use crate::keychain::Keychain;
use crate::launch_ingest::{LaunchImporter, SpaceXCatalog};
use crate::persistence::PersistenceContext;
use crate::planet_catalog::read_survey;
use std::sync::Arc;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = Config::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e}"));
    let keychain = init(&config).await;

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .unwrap_or_else(|e| fatal!("Could not bind {}: {e}", config.listen_addr()));
    info!("Listening on {}...", config.listen_addr());
    let served = axum::serve(listener, routes::router(keychain.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = served {
        error!("Server stopped with error: {e}");
    }

    if let Err(e) = keychain.ctx().close().await {
        error!("Could not close the persistence context: {e}");
    }
    info!("Shut down.");
}

/// Opens the stores, loads the planet catalog and imports the launch history.
///
/// Any failure here is fatal, the service never serves on partially initialized stores.
async fn init(config: &Config) -> Keychain {
    let ctx = PersistenceContext::open(config.database_url())
        .await
        .unwrap_or_else(|e| fatal!("Could not open {}: {e}", config.database_url()));
    let keychain = Keychain::new(Arc::new(ctx));

    let survey = read_survey(config.kepler_data_path())
        .unwrap_or_else(|e| fatal!("Could not read {}: {e}", config.kepler_data_path().display()));
    if let Err(e) = keychain.planets().filter_and_load(survey).await {
        fatal!("Planet data could not be loaded: {e}");
    }

    let client = HTTPClient::new(config.launch_catalog_url())
        .unwrap_or_else(|e| fatal!("Could not build the catalog client: {e}"));
    let source = Arc::new(SpaceXCatalog::new(Arc::new(client)));
    let importer = LaunchImporter::new(keychain.registry(), source);
    if let Err(e) = importer.import_if_empty().await {
        fatal!("{e}");
    }
    keychain
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Could not listen for the shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log!("Shutdown requested");
}
