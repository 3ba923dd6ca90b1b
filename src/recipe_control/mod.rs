mod account_controller;
mod pantry_controller;
mod recipe_controller;

pub use account_controller::AccountController;
pub use pantry_controller::PantryController;
pub use recipe_controller::RecipeController;
