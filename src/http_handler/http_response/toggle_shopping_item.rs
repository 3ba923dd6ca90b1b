use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct ToggleShoppingItemResponse {}

impl EnvelopeHTTPResponseType for ToggleShoppingItemResponse {
    type Data = ();
}
