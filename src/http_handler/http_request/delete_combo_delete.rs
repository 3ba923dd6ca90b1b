use super::delete_combo::DeleteComboResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct DeleteComboRequest {
    pub(crate) combo_id: i64,
}

impl NoBodyHTTPRequestType for DeleteComboRequest {}

impl HTTPRequestType for DeleteComboRequest {
    type Response = DeleteComboResponse;
    fn endpoint(&self) -> String {
        format!("/combos/{}", self.combo_id)
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Delete
    }
}
