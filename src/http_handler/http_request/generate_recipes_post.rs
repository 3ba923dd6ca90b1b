use super::super::http_handler_common::{CuisineType, DifficultyLevel, FlavorType};
use super::generate_recipes::GenerateRecipesResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /recipes/generate endpoint.
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    /// Ingredients the generated recipes should build on.
    pub(crate) ingredients: Vec<GenerateIngredient>,
    pub(crate) cuisine_type: CuisineType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) flavor_types: Option<Vec<FlavorType>>,
    /// Upper bound on cooking time in minutes.
    pub(crate) cooking_time: i32,
    pub(crate) difficulty_level: DifficultyLevel,
}

/// One ingredient the user wants used, with an optional quantity.
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIngredient {
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) quantity: Option<String>,
}

impl JSONBodyHTTPRequestType for GenerateRecipesRequest {
    type Body = GenerateRecipesRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for GenerateRecipesRequest {
    type Response = GenerateRecipesResponse;
    fn endpoint(&self) -> String { String::from("/recipes/generate") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
