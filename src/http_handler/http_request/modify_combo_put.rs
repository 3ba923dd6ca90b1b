use super::modify_combo::ModifyComboResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for updating a saved combo via /combos/{id}. The id
/// rides in the path, so it is skipped when the body serializes.
#[derive(serde::Serialize, Debug)]
pub(crate) struct ModifyComboRequest {
    #[serde(skip)]
    pub(crate) combo_id: i64,
    pub(crate) name: String,
    pub(crate) ingredients: String,
}

impl JSONBodyHTTPRequestType for ModifyComboRequest {
    type Body = ModifyComboRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for ModifyComboRequest {
    type Response = ModifyComboResponse;
    fn endpoint(&self) -> String { format!("/combos/{}", self.combo_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
