use super::delete_shopping_item::DeleteShoppingItemResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DeleteShoppingItemRequest {
    pub(crate) item_id: i64,
}

impl NoBodyHTTPRequestType for DeleteShoppingItemRequest {}

impl HTTPRequestType for DeleteShoppingItemRequest {
    type Response = DeleteShoppingItemResponse;
    fn endpoint(&self) -> String {
        format!("/shopping-list/{}", self.item_id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Delete
    }
}
