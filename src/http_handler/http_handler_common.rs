use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::{Display, EnumIter, EnumString};

/// Cuisine styles known to the recipe service, serialized with the
/// `SCREAMING_SNAKE_CASE` names the backend stores.
#[derive(
    serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CuisineType {
    Chinese,
    Sichuan,
    Cantonese,
    Hunan,
    Western,
    Japanese,
    Korean,
}

impl CuisineType {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chinese => "Chinese (Home-style)",
            Self::Sichuan => "Sichuan",
            Self::Cantonese => "Cantonese",
            Self::Hunan => "Hunan",
            Self::Western => "Western",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
        }
    }
}

#[derive(
    serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(
    serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum FlavorType {
    Spicy,
    Sweet,
    Sour,
    Salty,
    Savory,
    Mild,
}

impl FlavorType {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spicy => "Spicy",
            Self::Sweet => "Sweet",
            Self::Sour => "Sour",
            Self::Salty => "Salty",
            Self::Savory => "Savory",
            Self::Mild => "Mild",
        }
    }
}

#[derive(
    serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum IngredientCategory {
    Vegetable,
    Meat,
    Seafood,
    Dairy,
    Grain,
    Spice,
    Other,
}

impl IngredientCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Vegetable => "Vegetable",
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Dairy => "Dairy",
            Self::Grain => "Grain",
            Self::Spice => "Spice",
            Self::Other => "Other",
        }
    }
}

/// Account data as the service reports it. Also persisted alongside the
/// bearer token in the local session file.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    id: i64,
    username: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    create_time: Option<chrono::NaiveDateTime>,
}

impl UserInfo {
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn create_time(&self) -> Option<chrono::NaiveDateTime> {
        self.create_time
    }
}

/// A generated or stored recipe, including its ingredient lines and
/// preparation steps.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: i64,
    name: String,
    cuisine_type: CuisineType,
    /// Comma-joined [`FlavorType`] wire names, stored denormalized.
    #[serde(default)]
    flavor_types: Option<String>,
    cooking_time: i32,
    difficulty_level: DifficultyLevel,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    servings: Option<i32>,
    #[serde(default)]
    ingredients: Vec<RecipeIngredientInfo>,
    #[serde(default)]
    steps: Vec<RecipeStep>,
    #[serde(default)]
    create_time: Option<chrono::NaiveDateTime>,
}

impl Recipe {
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn cuisine_type(&self) -> CuisineType {
        self.cuisine_type
    }
    pub fn flavor_types(&self) -> Vec<FlavorType> {
        self.flavor_types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|t| t.trim().parse().ok())
            .collect()
    }
    /// Cooking time in minutes.
    pub fn cooking_time(&self) -> i32 {
        self.cooking_time
    }
    pub fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty_level
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
    pub fn servings(&self) -> Option<i32> {
        self.servings
    }
    pub fn ingredients(&self) -> &[RecipeIngredientInfo] {
        &self.ingredients
    }
    pub fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }
    pub fn create_time(&self) -> Option<chrono::NaiveDateTime> {
        self.create_time
    }
}

/// One ingredient line of a recipe.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientInfo {
    #[serde(default)]
    ingredient_id: Option<i64>,
    name: String,
    quantity: String,
    #[serde(default)]
    is_required: Option<bool>,
}

impl RecipeIngredientInfo {
    pub fn ingredient_id(&self) -> Option<i64> {
        self.ingredient_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn quantity(&self) -> &str {
        &self.quantity
    }
    /// Unspecified counts as required.
    pub fn is_required(&self) -> bool {
        self.is_required.unwrap_or(true)
    }
}

/// One numbered preparation step of a recipe.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    step_number: i32,
    description: String,
    #[serde(default)]
    duration: Option<i32>,
}

impl RecipeStep {
    pub fn step_number(&self) -> i32 {
        self.step_number
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Step duration in minutes, when the recipe specifies one.
    pub fn duration(&self) -> Option<i32> {
        self.duration
    }
}

/// An entry of the service-side ingredient catalog.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    id: i64,
    name: String,
    category: IngredientCategory,
    #[serde(default)]
    common_unit: Option<String>,
    #[serde(default)]
    calories: Option<i32>,
}

impl Ingredient {
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn category(&self) -> IngredientCategory {
        self.category
    }
    pub fn common_unit(&self) -> Option<&str> {
        self.common_unit.as_deref()
    }
    /// Kilocalories per 100g, when cataloged.
    pub fn calories(&self) -> Option<i32> {
        self.calories
    }
}

/// A saved, named set of ingredients for quick re-use when generating.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCombo {
    id: i64,
    #[serde(default)]
    user_id: Option<i64>,
    name: String,
    /// Comma-joined ingredient names, stored denormalized.
    ingredients: String,
    #[serde(default)]
    create_time: Option<chrono::NaiveDateTime>,
}

impl IngredientCombo {
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.split(',').map(str::trim).filter(|n| !n.is_empty()).collect()
    }
    pub fn create_time(&self) -> Option<chrono::NaiveDateTime> {
        self.create_time
    }
}

/// A favorites entry; the service embeds the full recipe when listing.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    id: i64,
    recipe_id: i64,
    #[serde(default)]
    create_time: Option<chrono::NaiveDateTime>,
    #[serde(default)]
    recipe: Option<Recipe>,
}

impl FavoriteEntry {
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }
    pub fn create_time(&self) -> Option<chrono::NaiveDateTime> {
        self.create_time
    }
    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }
}

/// A line of the personal shopping list; the service embeds the
/// referenced catalog ingredient when listing.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    id: i64,
    ingredient_id: i64,
    quantity: String,
    #[serde(default)]
    note: Option<String>,
    is_purchased: bool,
    #[serde(default)]
    ingredient: Option<Ingredient>,
}

impl ShoppingItem {
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn ingredient_id(&self) -> i64 {
        self.ingredient_id
    }
    pub fn quantity(&self) -> &str {
        &self.quantity
    }
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
    pub fn is_purchased(&self) -> bool {
        self.is_purchased
    }
    pub fn ingredient(&self) -> Option<&Ingredient> {
        self.ingredient.as_ref()
    }
}

/// Transport or service failure raised by a request. The `Display`
/// output is the normalized, user-presentable message.
#[derive(Debug)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl HTTPError {
    /// True when the service answered 401 and the stored session was
    /// dropped as a consequence.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::HTTPResponseError(ResponseError::Unauthorized(_)))
    }
}

impl std::fmt::Display for HTTPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HTTPRequestError(e) => write!(f, "{e}"),
            Self::HTTPResponseError(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self {
        Self::HTTPRequestError(value)
    }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self {
        Self::HTTPResponseError(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_parses_service_shape() {
        let raw = r#"{
            "id": 42,
            "name": "Mapo Tofu",
            "cuisineType": "SICHUAN",
            "flavorTypes": "SPICY,SAVORY",
            "cookingTime": 25,
            "difficultyLevel": "MEDIUM",
            "description": "Silken tofu in chili bean sauce.",
            "imageUrl": null,
            "servings": 2,
            "ingredients": [
                {"ingredientId": 7, "name": "tofu", "quantity": "400g", "isRequired": true},
                {"name": "scallion", "quantity": "2 stalks", "isRequired": false}
            ],
            "steps": [
                {"stepNumber": 1, "description": "Cube the tofu.", "duration": 5},
                {"stepNumber": 2, "description": "Simmer in the sauce.", "duration": 10}
            ],
            "createTime": "2024-01-15T10:30:00"
        }"#;
        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert_eq!(recipe.id(), 42);
        assert_eq!(recipe.cuisine_type(), CuisineType::Sichuan);
        assert_eq!(recipe.difficulty_level(), DifficultyLevel::Medium);
        assert_eq!(recipe.flavor_types(), vec![FlavorType::Spicy, FlavorType::Savory]);
        assert_eq!(recipe.ingredients().len(), 2);
        assert!(recipe.ingredients()[0].is_required());
        assert!(!recipe.ingredients()[1].is_required());
        assert_eq!(recipe.ingredients()[1].ingredient_id(), None);
        assert_eq!(recipe.steps()[1].step_number(), 2);
        assert!(recipe.create_time().is_some());
    }

    #[test]
    fn recipe_tolerates_sparse_payload() {
        let raw = r#"{"id": 1, "name": "Plain Congee", "cuisineType": "CHINESE",
                      "cookingTime": 40, "difficultyLevel": "EASY"}"#;
        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert!(recipe.flavor_types().is_empty());
        assert!(recipe.ingredients().is_empty());
        assert!(recipe.steps().is_empty());
        assert_eq!(recipe.servings(), None);
    }

    #[test]
    fn user_info_parses_zoneless_timestamp() {
        let raw = r#"{"id": 3, "username": "maria", "email": "m@example.com",
                      "createTime": "2024-03-02T08:00:15"}"#;
        let user: UserInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(user.username(), "maria");
        assert_eq!(
            user.create_time().unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 2).unwrap().and_hms_opt(8, 0, 15).unwrap()
        );
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("sichuan".parse::<CuisineType>().unwrap(), CuisineType::Sichuan);
        assert_eq!("HARD".parse::<DifficultyLevel>().unwrap(), DifficultyLevel::Hard);
        assert_eq!("Spicy".parse::<FlavorType>().unwrap(), FlavorType::Spicy);
        assert!("klingon".parse::<CuisineType>().is_err());
    }

    #[test]
    fn enums_print_wire_names() {
        assert_eq!(CuisineType::Cantonese.to_string(), "CANTONESE");
        assert_eq!(FlavorType::Savory.to_string(), "SAVORY");
        assert_eq!(serde_json::to_string(&DifficultyLevel::Easy).unwrap(), "\"EASY\"");
    }

    #[test]
    fn combo_splits_ingredient_names() {
        let raw = r#"{"id": 9, "userId": 3, "name": "weekday staples",
                      "ingredients": "tofu, scallion,garlic , "}"#;
        let combo: IngredientCombo = serde_json::from_str(raw).unwrap();
        assert_eq!(combo.ingredient_names(), vec!["tofu", "scallion", "garlic"]);
    }

    #[test]
    fn shopping_item_embeds_catalog_ingredient() {
        let raw = r#"{"id": 5, "ingredientId": 7, "quantity": "2", "isPurchased": false,
                      "ingredient": {"id": 7, "name": "tofu", "category": "OTHER",
                                     "commonUnit": "block", "calories": 76}}"#;
        let item: ShoppingItem = serde_json::from_str(raw).unwrap();
        assert!(!item.is_purchased());
        assert_eq!(item.ingredient().unwrap().name(), "tofu");
        assert_eq!(item.ingredient().unwrap().category(), IngredientCategory::Other);
    }
}
