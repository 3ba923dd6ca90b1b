use super::ingredient_search::IngredientSearchResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /ingredients/search endpoint. The name goes
/// into the query string; matching happens server-side.
#[derive(Debug)]
pub struct IngredientSearchRequest {
    pub(crate) name: String,
}

impl NoBodyHTTPRequestType for IngredientSearchRequest {}

impl HTTPRequestType for IngredientSearchRequest {
    type Response = IngredientSearchResponse;
    fn endpoint(&self) -> String {
        String::from("/ingredients/search")
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone())]
    }
}
