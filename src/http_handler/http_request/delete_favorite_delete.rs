use super::delete_favorite::DeleteFavoriteResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DeleteFavoriteRequest {
    pub(crate) recipe_id: i64,
}

impl NoBodyHTTPRequestType for DeleteFavoriteRequest {}

impl HTTPRequestType for DeleteFavoriteRequest {
    type Response = DeleteFavoriteResponse;
    fn endpoint(&self) -> String {
        format!("/favorites/{}", self.recipe_id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Delete
    }
}
