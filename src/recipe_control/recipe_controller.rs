use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::{FavoriteEntry, HTTPError, Recipe},
    http_request::{
        add_favorite_post::AddFavoriteRequest,
        delete_favorite_delete::DeleteFavoriteRequest,
        delete_recipe_delete::DeleteRecipeRequest,
        favorite_check_get::FavoriteCheckRequest,
        favorite_list_get::FavoriteListRequest,
        generate_recipes_post::GenerateRecipesRequest,
        recipe_get::RecipeRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    },
};
use crate::info;
use std::sync::Arc;

/// Recipe operations: generation, lookup, deletion and favorites.
pub struct RecipeController {
    client: Arc<HTTPClient>,
}

impl RecipeController {
    pub fn new(client: Arc<HTTPClient>) -> Self {
        Self { client }
    }

    /// Asks the service to generate recipes for the given parameters.
    /// The service waits on a language model upstream, so this is the
    /// slowest call in the program.
    pub async fn generate(
        &self,
        request: GenerateRecipesRequest,
    ) -> Result<Vec<Recipe>, HTTPError> {
        let envelope = request.send_request(&self.client).await?;
        info!("{} ({} recipes)", envelope.message(), envelope.data().len());
        Ok(envelope.into_data())
    }

    pub async fn recipe_by_id(&self, id: i64) -> Result<Recipe, HTTPError> {
        Ok((RecipeRequest { id }).send_request(&self.client).await?.into_data())
    }

    /// Deletes a stored recipe, answering with the service message.
    pub async fn delete_recipe(&self, id: i64) -> Result<String, HTTPError> {
        Ok((DeleteRecipeRequest { id }).send_request(&self.client).await?.into_message())
    }

    pub async fn add_favorite(&self, recipe_id: i64) -> Result<FavoriteEntry, HTTPError> {
        Ok((AddFavoriteRequest { recipe_id }).send_request(&self.client).await?.into_data())
    }

    pub async fn remove_favorite(&self, recipe_id: i64) -> Result<String, HTTPError> {
        Ok((DeleteFavoriteRequest { recipe_id }).send_request(&self.client).await?.into_message())
    }

    /// Lists the favorites of the logged-in user, recipes embedded.
    pub async fn favorites(&self) -> Result<Vec<FavoriteEntry>, HTTPError> {
        Ok((FavoriteListRequest {}).send_request(&self.client).await?.into_data())
    }

    pub async fn is_favorited(&self, recipe_id: i64) -> Result<bool, HTTPError> {
        Ok((FavoriteCheckRequest { recipe_id }).send_request(&self.client).await?.into_data())
    }
}
