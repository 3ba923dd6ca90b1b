use crate::http_handler::http_handler_common::FavoriteEntry;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct AddFavoriteResponse {}

impl EnvelopeHTTPResponseType for AddFavoriteResponse {
    type Data = FavoriteEntry;
}
