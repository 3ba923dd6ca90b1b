use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct DeleteShoppingItemResponse {}

impl EnvelopeHTTPResponseType for DeleteShoppingItemResponse {
    type Data = ();
}
