use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct FavoriteCheckResponse {}

impl EnvelopeHTTPResponseType for FavoriteCheckResponse {
    type Data = bool;
}
