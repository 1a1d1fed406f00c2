use super::launch_query::LaunchQueryResponse;
use super::request_common::{HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /launches/query endpoint.
///
/// Asks for every launch in one unpaginated batch, with the rocket name and the payload
/// customers populated inline.
#[derive(serde::Serialize, Debug)]
pub(crate) struct LaunchQueryRequest {
    /// Match-all filter, serialized as `{}`.
    query: MatchAll,
    options: QueryOptions,
}

#[derive(serde::Serialize, Debug)]
struct MatchAll {}

#[derive(serde::Serialize, Debug)]
struct QueryOptions {
    pagination: bool,
    populate: Vec<Populate>,
}

/// Inlines a referenced document, restricted to the selected fields.
#[derive(serde::Serialize, Debug)]
struct Populate {
    path: &'static str,
    select: Selection,
}

#[derive(serde::Serialize, Debug)]
#[serde(untagged)]
enum Selection {
    Name { name: u8 },
    Customers { customers: u8 },
}

impl LaunchQueryRequest {
    /// The full launch history including rocket names and payload customers.
    pub(crate) fn full_history() -> Self {
        Self {
            query: MatchAll {},
            options: QueryOptions {
                pagination: false,
                populate: vec![
                    Populate { path: "rocket", select: Selection::Name { name: 1 } },
                    Populate { path: "payloads", select: Selection::Customers { customers: 1 } },
                ],
            },
        }
    }
}

impl JSONBodyHTTPRequestType for LaunchQueryRequest {
    /// The type of the json body.
    type Body = LaunchQueryRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LaunchQueryRequest {
    /// Type of the expected response.
    type Response = LaunchQueryResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/launches/query" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> reqwest::Method { reqwest::Method::POST }
}
