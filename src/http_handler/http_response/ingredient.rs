use crate::http_handler::http_handler_common::Ingredient;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct IngredientResponse {}

impl EnvelopeHTTPResponseType for IngredientResponse {
    type Data = Ingredient;
}
