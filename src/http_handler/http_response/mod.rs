pub mod response_common;

pub mod login;
pub mod register;
pub mod user_info;

pub mod generate_recipes;
pub mod recipe;
pub mod delete_recipe;

pub mod ingredient;
pub mod ingredient_list;
pub mod ingredient_search;

pub mod combo_list;
pub mod delete_combo;
pub mod modify_combo;
pub mod save_combo;

pub mod add_favorite;
pub mod delete_favorite;
pub mod favorite_check;
pub mod favorite_list;

pub mod add_shopping_item;
pub mod delete_shopping_item;
pub mod shopping_list;
pub mod toggle_shopping_item;
