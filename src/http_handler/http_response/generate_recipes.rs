use crate::http_handler::http_handler_common::Recipe;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

/// Generation always answers with a list, usually of three recipes.
pub struct GenerateRecipesResponse {}

impl EnvelopeHTTPResponseType for GenerateRecipesResponse {
    type Data = Vec<Recipe>;
}
