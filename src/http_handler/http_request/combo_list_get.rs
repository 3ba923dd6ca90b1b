use super::combo_list::ComboListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct ComboListRequest {}

impl NoBodyHTTPRequestType for ComboListRequest {}

impl HTTPRequestType for ComboListRequest {
    type Response = ComboListResponse;
    fn endpoint(&self) -> String {
        String::from("/combos")
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
