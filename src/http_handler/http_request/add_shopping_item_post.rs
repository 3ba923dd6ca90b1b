use super::add_shopping_item::AddShoppingItemResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for appending a line to the shopping list.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddShoppingItemRequest {
    pub(crate) ingredient_id: i64,
    pub(crate) quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) note: Option<String>,
}

impl JSONBodyHTTPRequestType for AddShoppingItemRequest {
    type Body = AddShoppingItemRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for AddShoppingItemRequest {
    type Response = AddShoppingItemResponse;
    fn endpoint(&self) -> String { String::from("/shopping-list") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
