use crate::http_handler::http_handler_common::IngredientCombo;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct ComboListResponse {}

impl EnvelopeHTTPResponseType for ComboListResponse {
    type Data = Vec<IngredientCombo>;
}
