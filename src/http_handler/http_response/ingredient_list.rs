use crate::http_handler::http_handler_common::Ingredient;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct IngredientListResponse {}

impl EnvelopeHTTPResponseType for IngredientListResponse {
    type Data = Vec<Ingredient>;
}
