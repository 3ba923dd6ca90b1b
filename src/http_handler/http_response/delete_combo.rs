use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct DeleteComboResponse {}

impl EnvelopeHTTPResponseType for DeleteComboResponse {
    type Data = ();
}
