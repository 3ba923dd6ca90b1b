use super::favorite_check::FavoriteCheckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for asking whether a recipe is already favorited.
#[derive(Debug)]
pub struct FavoriteCheckRequest {
    pub(crate) recipe_id: i64,
}

impl NoBodyHTTPRequestType for FavoriteCheckRequest {}

impl HTTPRequestType for FavoriteCheckRequest {
    type Response = FavoriteCheckResponse;
    fn endpoint(&self) -> String {
        format!("/favorites/{}", self.recipe_id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
