use super::register::RegisterResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /auth/register endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct RegisterRequest {
    pub(crate) username: String,
    pub(crate) password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
}

impl JSONBodyHTTPRequestType for RegisterRequest {
    type Body = RegisterRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RegisterRequest {
    type Response = RegisterResponse;
    fn endpoint(&self) -> String { String::from("/auth/register") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
