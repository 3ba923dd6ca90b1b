use crate::http_handler::http_handler_common::Ingredient;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

/// A miss is a success envelope with `data: null`, not an error.
pub struct IngredientSearchResponse {}

impl EnvelopeHTTPResponseType for IngredientSearchResponse {
    type Data = Option<Ingredient>;
}
