use super::favorite_list::FavoriteListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct FavoriteListRequest {}

impl NoBodyHTTPRequestType for FavoriteListRequest {}

impl HTTPRequestType for FavoriteListRequest {
    type Response = FavoriteListResponse;
    fn endpoint(&self) -> String {
        String::from("/favorites")
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
