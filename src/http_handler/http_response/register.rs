use crate::http_handler::http_handler_common::UserInfo;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

/// Registration answers with the freshly created account; logging in
/// stays a separate step.
pub struct RegisterResponse {}

impl EnvelopeHTTPResponseType for RegisterResponse {
    type Data = UserInfo;
}
