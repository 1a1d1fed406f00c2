use super::RouteError;
use crate::keychain::Keychain;
use crate::planet_catalog::Planet;
use axum::{Json, extract::State};

pub(super) async fn http_get_all_planets(
    State(keychain): State<Keychain>,
) -> Result<Json<Vec<Planet>>, RouteError> {
    Ok(Json(keychain.planets().list().await?))
}
