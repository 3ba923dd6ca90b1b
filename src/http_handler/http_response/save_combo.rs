use crate::http_handler::http_handler_common::IngredientCombo;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct SaveComboResponse {}

impl EnvelopeHTTPResponseType for SaveComboResponse {
    type Data = IngredientCombo;
}
