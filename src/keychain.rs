use crate::launch_registry::LaunchRegistry;
use crate::persistence::PersistenceContext;
use crate::planet_catalog::PlanetCatalog;
use std::sync::Arc;

/// Struct holding the shared components of the service, providing access to the
/// persistence context, the planet catalog and the launch registry.
///
/// Cloning a `Keychain` only clones the contained `Arc`s, so it can be handed to every
/// request handler.
#[derive(Clone, Debug)]
pub struct Keychain {
    /// The storage substrate both stores are built on.
    ctx: Arc<PersistenceContext>,
    /// The catalog of habitable planets.
    planets: Arc<PlanetCatalog>,
    /// The registry of historical and scheduled launches.
    registry: Arc<LaunchRegistry>,
}

impl Keychain {
    /// Creates a new `Keychain` on top of an opened persistence context.
    ///
    /// # Arguments
    /// - `ctx`: The persistence context shared by all stores.
    ///
    /// # Returns
    /// A new instance of `Keychain` with the planet catalog and the launch registry wired up.
    pub fn new(ctx: Arc<PersistenceContext>) -> Self {
        let planets = Arc::new(PlanetCatalog::new(Arc::clone(&ctx)));
        let registry = Arc::new(LaunchRegistry::new(Arc::clone(&ctx), Arc::clone(&planets)));
        Self { ctx, planets, registry }
    }

    /// Provides a cloned reference to the persistence context.
    pub fn ctx(&self) -> Arc<PersistenceContext> { Arc::clone(&self.ctx) }

    /// Provides a cloned reference to the planet catalog.
    pub fn planets(&self) -> Arc<PlanetCatalog> { Arc::clone(&self.planets) }

    /// Provides a cloned reference to the launch registry.
    pub fn registry(&self) -> Arc<LaunchRegistry> { Arc::clone(&self.registry) }
}
