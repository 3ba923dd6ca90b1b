use crate::http_handler::http_handler_common::Recipe;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct RecipeResponse {}

impl EnvelopeHTTPResponseType for RecipeResponse {
    type Data = Recipe;
}
