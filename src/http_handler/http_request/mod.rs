use super::http_response::{
    add_favorite, add_shopping_item, combo_list, delete_combo, delete_favorite, delete_recipe,
    delete_shopping_item, favorite_check, favorite_list, generate_recipes, ingredient,
    ingredient_list, ingredient_search, login, modify_combo, recipe, register, save_combo,
    shopping_list, toggle_shopping_item, user_info,
};

pub mod add_favorite_post;
pub mod add_shopping_item_post;
pub mod combo_list_get;
pub mod delete_combo_delete;
pub mod delete_favorite_delete;
pub mod delete_recipe_delete;
pub mod delete_shopping_item_delete;
pub mod favorite_check_get;
pub mod favorite_list_get;
pub mod generate_recipes_post;
pub mod ingredient_get;
pub mod ingredient_list_get;
pub mod ingredient_search_get;
pub mod login_post;
pub mod modify_combo_put;
pub mod recipe_get;
pub mod register_post;
pub mod request_common;
pub mod save_combo_post;
pub mod shopping_list_get;
pub mod toggle_shopping_item_put;
pub mod user_info_get;
