use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::shopping_list::ShoppingListResponse;

#[derive(Debug)]
pub struct ShoppingListRequest {}

impl NoBodyHTTPRequestType for ShoppingListRequest {}

impl HTTPRequestType for ShoppingListRequest {
    type Response = ShoppingListResponse;
    fn endpoint(&self) -> String {
        String::from("/shopping-list")
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
