use super::ingredient_list::IngredientListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct IngredientListRequest {}

impl NoBodyHTTPRequestType for IngredientListRequest {}

impl HTTPRequestType for IngredientListRequest {
    type Response = IngredientListResponse;
    fn endpoint(&self) -> String {
        String::from("/ingredients")
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
