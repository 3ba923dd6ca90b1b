use crate::http_handler::http_handler_common::ShoppingItem;
use crate::http_handler::http_response::response_common::EnvelopeHTTPResponseType;

pub struct ShoppingListResponse {}

impl EnvelopeHTTPResponseType for ShoppingListResponse {
    type Data = Vec<ShoppingItem>;
}
