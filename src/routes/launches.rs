use super::RouteError;
use crate::keychain::Keychain;
use crate::launch_registry::{Launch, LaunchRequest};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

/// Paging parameters of the launch listing.
#[derive(serde::Deserialize, Debug, Default)]
pub(super) struct Pagination {
    /// One-based page index. Values below 1 select the first page.
    page: Option<u64>,
    /// Launches per page, `0` or absent for all launches.
    limit: Option<u64>,
}

impl Pagination {
    /// Translates the page parameters into `(skip, limit)` for the registry.
    fn skip_and_limit(&self) -> (u64, Option<u64>) {
        match self.limit.filter(|limit| *limit > 0) {
            Some(limit) => {
                let page = self.page.unwrap_or(1).max(1);
                ((page - 1).saturating_mul(limit), Some(limit))
            }
            None => (0, None),
        }
    }
}

pub(super) async fn http_get_all_launches(
    State(keychain): State<Keychain>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Launch>>, RouteError> {
    let (skip, limit) = pagination.skip_and_limit();
    Ok(Json(keychain.registry().list(skip, limit).await?))
}

pub(super) async fn http_add_new_launch(
    State(keychain): State<Keychain>,
    request: Result<Json<LaunchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Launch>), RouteError> {
    let Json(request) = request?;
    let launch = keychain.registry().schedule(request).await?;
    Ok((StatusCode::CREATED, Json(launch)))
}

pub(super) async fn http_abort_launch(
    State(keychain): State<Keychain>,
    Path(flight_number): Path<i32>,
) -> Result<Json<Value>, RouteError> {
    let registry = keychain.registry();
    if !registry.exists(flight_number).await? {
        return Err(RouteError::LaunchNotFound);
    }
    if registry.abort(flight_number).await? {
        Ok(Json(json!({ "ok": true })))
    } else {
        Err(RouteError::NotAborted)
    }
}
