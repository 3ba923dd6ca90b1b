use super::add_favorite::AddFavoriteResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for favoriting a recipe via /favorites/{recipeId}.
#[derive(Debug)]
pub struct AddFavoriteRequest {
    pub(crate) recipe_id: i64,
}

impl NoBodyHTTPRequestType for AddFavoriteRequest {}

impl HTTPRequestType for AddFavoriteRequest {
    type Response = AddFavoriteResponse;
    fn endpoint(&self) -> String {
        format!("/favorites/{}", self.recipe_id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Post
    }
}
