//! Storage substrate shared by the planet catalog, the launch importer and the launch registry.
//!
//! The `launches` table is keyed by flight number and the `planets` table by kepler name,
//! so every write can be expressed as an upsert on the natural identity key.

mod persistence_context;
pub mod launch;
pub mod planet;

pub use persistence_context::PersistenceContext;

#[cfg(test)]
pub(crate) async fn open_in_memory() -> std::sync::Arc<PersistenceContext> {
    std::sync::Arc::new(PersistenceContext::open("sqlite::memory:").await.expect("in-memory sqlite"))
}
