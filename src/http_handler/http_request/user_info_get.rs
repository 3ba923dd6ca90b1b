use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::user_info::UserInfoResponse;

#[derive(Debug)]
pub struct UserInfoRequest {}

impl NoBodyHTTPRequestType for UserInfoRequest {}

impl HTTPRequestType for UserInfoRequest {
    type Response = UserInfoResponse;
    fn endpoint(&self) -> String {
        String::from("/user/info")
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
