use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct ModifyComboResponse {}

impl EnvelopeHTTPResponseType for ModifyComboResponse {
    type Data = ();
}
