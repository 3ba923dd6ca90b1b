use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct DeleteFavoriteResponse {}

impl EnvelopeHTTPResponseType for DeleteFavoriteResponse {
    type Data = ();
}
