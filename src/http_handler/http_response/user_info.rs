use crate::http_handler::http_handler_common::UserInfo;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct UserInfoResponse {}

impl EnvelopeHTTPResponseType for UserInfoResponse {
    type Data = UserInfo;
}
