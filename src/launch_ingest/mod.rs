//! One-shot import of the historical launch catalog into the launch registry.

mod catalog_source;
mod importer;
mod ingestion_error;

pub use catalog_source::{LaunchCatalogSource, SpaceXCatalog};
pub use importer::LaunchImporter;
pub use ingestion_error::IngestionError;
