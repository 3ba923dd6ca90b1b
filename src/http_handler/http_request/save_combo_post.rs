use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::save_combo::SaveComboResponse;

/// Request type for the /combos endpoint. Ingredient names travel as a
/// single comma-joined string, matching how the service stores them.
#[derive(serde::Serialize, Debug)]
pub(crate) struct SaveComboRequest {
    pub(crate) name: String,
    pub(crate) ingredients: String,
}

impl JSONBodyHTTPRequestType for SaveComboRequest {
    type Body = SaveComboRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for SaveComboRequest {
    type Response = SaveComboResponse;
    fn endpoint(&self) -> String { String::from("/combos") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
