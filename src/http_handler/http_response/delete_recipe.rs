use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

/// Deletion carries no payload; the envelope message is the result.
pub struct DeleteRecipeResponse {}

impl EnvelopeHTTPResponseType for DeleteRecipeResponse {
    type Data = ();
}
