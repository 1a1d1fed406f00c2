//! HTTP surface of the service, exposing the planet catalog and the launch registry under
//! `/v1`.

mod launches;
mod planets;
mod route_error;

use crate::keychain::Keychain;
use axum::{
    Router,
    routing::{delete, get},
};

pub use route_error::RouteError;

/// Builds the versioned router with all handlers bound to `keychain`.
pub fn router(keychain: Keychain) -> Router {
    let v1 = Router::new()
        .route("/planets", get(planets::http_get_all_planets))
        .route(
            "/launches",
            get(launches::http_get_all_launches).post(launches::http_add_new_launch),
        )
        .route("/launches/{id}", delete(launches::http_abort_launch));
    Router::new().nest("/v1", v1).with_state(keychain)
}
