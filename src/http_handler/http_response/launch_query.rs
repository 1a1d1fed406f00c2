use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /launches/query endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct LaunchQueryResponse {
    /// The matching launches; the remaining paging fields are not needed.
    docs: Vec<CatalogLaunch>,
}

impl LaunchQueryResponse {
    pub(crate) fn into_docs(self) -> Vec<CatalogLaunch> { self.docs }
}

impl SerdeJSONBodyHTTPResponseType for LaunchQueryResponse {}

/// A launch as delivered by the external catalog.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct CatalogLaunch {
    flight_number: i32,
    name: String,
    rocket: CatalogRocket,
    #[serde(default)]
    payloads: Vec<CatalogPayload>,
    /// Launch time in the launch site's local offset, RFC 3339.
    date_local: String,
    upcoming: bool,
    /// Outcome, `null` while the launch has not happened.
    success: Option<bool>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
struct CatalogRocket {
    name: String,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
struct CatalogPayload {
    #[serde(default)]
    customers: Vec<String>,
}

impl CatalogLaunch {
    pub fn flight_number(&self) -> i32 { self.flight_number }
    pub fn name(&self) -> &str { &self.name }
    pub fn rocket_name(&self) -> &str { &self.rocket.name }
    pub fn date_local(&self) -> &str { &self.date_local }
    pub fn is_upcoming(&self) -> bool { self.upcoming }
    pub fn success(&self) -> Option<bool> { self.success }

    /// All payload customers in payload order, flattened into one list.
    pub fn customers(&self) -> Vec<String> {
        self.payloads.iter().flat_map(|payload| payload.customers.iter().cloned()).collect()
    }
}
