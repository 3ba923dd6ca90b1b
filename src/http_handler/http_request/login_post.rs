use super::login::LoginResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /auth/login endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    type Body = LoginRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    type Response = LoginResponse;
    fn endpoint(&self) -> String { String::from("/auth/login") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
