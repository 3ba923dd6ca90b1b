use crate::http_handler::http_handler_common::FavoriteEntry;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct FavoriteListResponse {}

impl EnvelopeHTTPResponseType for FavoriteListResponse {
    type Data = Vec<FavoriteEntry>;
}
