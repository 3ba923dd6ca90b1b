use super::ingredient::IngredientResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct IngredientRequest {
    pub(crate) id: i64,
}

impl NoBodyHTTPRequestType for IngredientRequest {}

impl HTTPRequestType for IngredientRequest {
    type Response = IngredientResponse;
    fn endpoint(&self) -> String {
        format!("/ingredients/{}", self.id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
