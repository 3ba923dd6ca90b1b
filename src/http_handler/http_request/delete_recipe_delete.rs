use super::delete_recipe::DeleteRecipeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DeleteRecipeRequest {
    pub(crate) id: i64,
}

impl NoBodyHTTPRequestType for DeleteRecipeRequest {}

impl HTTPRequestType for DeleteRecipeRequest {
    type Response = DeleteRecipeResponse;
    fn endpoint(&self) -> String {
        format!("/recipes/{}", self.id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Delete
    }
}
