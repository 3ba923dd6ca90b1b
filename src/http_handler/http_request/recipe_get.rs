use super::recipe::RecipeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /recipes/{id} endpoint.
#[derive(Debug)]
pub struct RecipeRequest {
    pub(crate) id: i64,
}

impl NoBodyHTTPRequestType for RecipeRequest {}

impl HTTPRequestType for RecipeRequest {
    type Response = RecipeResponse;
    fn endpoint(&self) -> String {
        format!("/recipes/{}", self.id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
