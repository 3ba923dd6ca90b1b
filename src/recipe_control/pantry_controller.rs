use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::{HTTPError, Ingredient, IngredientCombo, ShoppingItem},
    http_request::{
        add_shopping_item_post::AddShoppingItemRequest,
        combo_list_get::ComboListRequest,
        delete_combo_delete::DeleteComboRequest,
        delete_shopping_item_delete::DeleteShoppingItemRequest,
        ingredient_get::IngredientRequest,
        ingredient_list_get::IngredientListRequest,
        ingredient_search_get::IngredientSearchRequest,
        modify_combo_put::ModifyComboRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
        save_combo_post::SaveComboRequest,
        shopping_list_get::ShoppingListRequest,
        toggle_shopping_item_put::ToggleShoppingItemRequest,
    },
};
use std::sync::Arc;

/// Ingredient catalog, saved combos and the personal shopping list.
pub struct PantryController {
    client: Arc<HTTPClient>,
}

impl PantryController {
    pub fn new(client: Arc<HTTPClient>) -> Self {
        Self { client }
    }

    pub async fn ingredients(&self) -> Result<Vec<Ingredient>, HTTPError> {
        Ok((IngredientListRequest {}).send_request(&self.client).await?.into_data())
    }

    /// Server-side smart match; `None` when nothing in the catalog fits.
    pub async fn search_ingredient(&self, name: &str) -> Result<Option<Ingredient>, HTTPError> {
        let request = IngredientSearchRequest { name: String::from(name) };
        Ok(request.send_request(&self.client).await?.into_data())
    }

    pub async fn ingredient_by_id(&self, id: i64) -> Result<Ingredient, HTTPError> {
        Ok((IngredientRequest { id }).send_request(&self.client).await?.into_data())
    }

    /// Saves a named combo. `ingredients` is the comma-joined name list
    /// the service stores verbatim.
    pub async fn save_combo(
        &self,
        name: &str,
        ingredients: &str,
    ) -> Result<IngredientCombo, HTTPError> {
        let request = SaveComboRequest {
            name: String::from(name),
            ingredients: String::from(ingredients),
        };
        Ok(request.send_request(&self.client).await?.into_data())
    }

    pub async fn combos(&self) -> Result<Vec<IngredientCombo>, HTTPError> {
        Ok((ComboListRequest {}).send_request(&self.client).await?.into_data())
    }

    pub async fn update_combo(
        &self,
        combo_id: i64,
        name: &str,
        ingredients: &str,
    ) -> Result<String, HTTPError> {
        let request = ModifyComboRequest {
            combo_id,
            name: String::from(name),
            ingredients: String::from(ingredients),
        };
        Ok(request.send_request(&self.client).await?.into_message())
    }

    pub async fn delete_combo(&self, combo_id: i64) -> Result<String, HTTPError> {
        Ok((DeleteComboRequest { combo_id }).send_request(&self.client).await?.into_message())
    }

    pub async fn shopping_list(&self) -> Result<Vec<ShoppingItem>, HTTPError> {
        Ok((ShoppingListRequest {}).send_request(&self.client).await?.into_data())
    }

    pub async fn add_shopping_item(
        &self,
        ingredient_id: i64,
        quantity: &str,
        note: Option<&str>,
    ) -> Result<ShoppingItem, HTTPError> {
        let request = AddShoppingItemRequest {
            ingredient_id,
            quantity: String::from(quantity),
            note: note.map(String::from),
        };
        Ok(request.send_request(&self.client).await?.into_data())
    }

    /// Flips the purchased state of a shopping line.
    pub async fn toggle_shopping_item(&self, item_id: i64) -> Result<String, HTTPError> {
        Ok((ToggleShoppingItemRequest { item_id }).send_request(&self.client).await?.into_message())
    }

    pub async fn remove_shopping_item(&self, item_id: i64) -> Result<String, HTTPError> {
        Ok((DeleteShoppingItemRequest { item_id }).send_request(&self.client).await?.into_message())
    }
}
