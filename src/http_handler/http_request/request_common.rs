use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// A request against an endpoint relative to the client's base URL.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> reqwest::Method;
    /// Additional headers sent with the request.
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }

    /// Builds the request with method, URL and headers set, but no body.
    fn get_request_base(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let url = format!("{}{}", client.url(), self.endpoint());
        client.client().request(self.request_method(), url).headers(self.header_params())
    }
}

/// A request carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    /// Sends the request and decodes the response.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = self.get_request_base(client).json(self.body()).send().await?;
        Self::Response::read_response(response).await
    }
}
