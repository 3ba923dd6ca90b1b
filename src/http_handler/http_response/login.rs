use crate::http_handler::http_handler_common::UserInfo;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

/// Payload of a successful login: the bearer token plus the account it
/// belongs to.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    token: String,
    user_info: UserInfo,
}

impl LoginData {
    pub fn token(&self) -> &str {
        &self.token
    }
    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }
    pub(crate) fn into_parts(self) -> (String, UserInfo) {
        (self.token, self.user_info)
    }
}

pub struct LoginResponse {}

impl EnvelopeHTTPResponseType for LoginResponse {
    type Data = LoginData;
}
