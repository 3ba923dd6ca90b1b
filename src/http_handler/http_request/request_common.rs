use super::super::http_client::HTTPClient;
use super::super::http_handler_common::HTTPError;
use super::super::http_response::response_common::{ApiErrorBody, HTTPResponseType, ResponseError};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

pub(crate) trait HTTPRequestType {
    /// Type describing how the expected response is parsed.
    type Response: HTTPResponseType;
    /// Path of the endpoint, appended to the client's base URL.
    fn endpoint(&self) -> String;
    /// The corresponding HTTP request method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Additional query parameters, none by default.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
    /// Additional header fields, none by default.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::new()
    }
}

/// Request types that send no body.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response =
            prepare_request(client, self).send().await.map_err(RequestError::from)?;
        evaluate_response::<Self>(client, response).await
    }
}

/// Request types that serialize a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable body object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = prepare_request(client, self)
            .json(self.body())
            .send()
            .await
            .map_err(RequestError::from)?;
        evaluate_response::<Self>(client, response).await
    }
}

/// Resolves the full URL, applies per-request headers and query
/// parameters, and attaches the stored bearer token when one exists.
fn prepare_request<T: HTTPRequestType + ?Sized>(
    client: &HTTPClient,
    request: &T,
) -> reqwest::RequestBuilder {
    let url = format!("{}{}", client.url(), request.endpoint());
    let builder = match request.request_method() {
        HTTPRequestMethod::Get => client.client().get(url),
        HTTPRequestMethod::Post => client.client().post(url),
        HTTPRequestMethod::Put => client.client().put(url),
        HTTPRequestMethod::Delete => client.client().delete(url),
    };
    let builder = builder.headers(request.header_params());
    let query = request.query_params();
    let builder = if query.is_empty() { builder } else { builder.query(&query) };
    match client.session().token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Evaluates a raw response. A 401 drops the stored session and signals
/// subscribers to get back to the login view before the error surfaces;
/// everything else is left to the response type.
async fn evaluate_response<T: HTTPRequestType + ?Sized>(
    client: &HTTPClient,
    response: reqwest::Response,
) -> Result<<T::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
    if response.status() == reqwest::StatusCode::UNAUTHORIZED {
        client.session().expire();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| String::from("unauthorized"));
        return Err(ResponseError::Unauthorized(message).into());
    }
    T::Response::read_response(response).await.map_err(HTTPError::from)
}

#[derive(Debug)]
pub enum RequestError {
    NoConnection,
    Timeout,
    /// Send-side transport failure with the underlying message.
    Transport(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConnection => write!(f, "no connection to the recipe service"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Transport(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RequestError {}
impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_connect() {
            RequestError::NoConnection
        } else {
            RequestError::Transport(value.to_string())
        }
    }
}
