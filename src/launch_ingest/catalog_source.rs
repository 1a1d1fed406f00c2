use super::IngestionError;
use crate::http_handler::HTTPClient;
use crate::http_handler::http_request::launch_query_post::LaunchQueryRequest;
use crate::http_handler::http_request::request_common::JSONBodyHTTPRequestType;
use crate::http_handler::http_response::launch_query::CatalogLaunch;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of historical launch records.
#[async_trait]
pub trait LaunchCatalogSource: Send + Sync {
    /// Fetches the complete catalog in a single batch.
    async fn fetch_launches(&self) -> Result<Vec<CatalogLaunch>, IngestionError>;
}

/// The public `SpaceX` launch API.
#[derive(Debug)]
pub struct SpaceXCatalog {
    client: Arc<HTTPClient>,
}

impl SpaceXCatalog {
    pub fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl LaunchCatalogSource for SpaceXCatalog {
    async fn fetch_launches(&self) -> Result<Vec<CatalogLaunch>, IngestionError> {
        let response = LaunchQueryRequest::full_history().send_request(&self.client).await?;
        Ok(response.into_docs())
    }
}
