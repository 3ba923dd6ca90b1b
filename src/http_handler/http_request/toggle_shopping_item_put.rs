use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::toggle_shopping_item::ToggleShoppingItemResponse;

/// Request type for flipping the purchased state of a shopping line.
#[derive(Debug)]
pub struct ToggleShoppingItemRequest {
    pub(crate) item_id: i64,
}

impl NoBodyHTTPRequestType for ToggleShoppingItemRequest {}

impl HTTPRequestType for ToggleShoppingItemRequest {
    type Response = ToggleShoppingItemResponse;
    fn endpoint(&self) -> String {
        format!("/shopping-list/{}/toggle", self.item_id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Put
    }
}
