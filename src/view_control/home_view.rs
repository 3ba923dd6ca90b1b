use super::login_view::LoginView;
use super::signal::ViewExitSignal;
use super::view::{View, prompt, stdin_lines};
use crate::http_handler::http_handler_common::{
    CuisineType, DifficultyLevel, FlavorType, HTTPError, Recipe,
};
use crate::http_handler::http_request::generate_recipes_post::{
    GenerateIngredient, GenerateRecipesRequest,
};
use crate::keychain::Keychain;
use crate::session::SessionEvent;
use crate::{error, warn};
use async_trait::async_trait;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Main view: the full command surface of a logged-in user. Besides the
/// command loop it watches the session channel, so a 401 raised by any
/// request sends the user back to the login view.
pub struct HomeView {}

enum CommandOutcome {
    Continue,
    BackToLogin,
    Exit,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    WhoAmI,
    Generate {
        cuisine: CuisineType,
        minutes: i32,
        difficulty: DifficultyLevel,
        ingredients: Vec<(String, Option<String>)>,
        flavors: Vec<FlavorType>,
    },
    Recipe(i64),
    DeleteRecipe(i64),
    Ingredients,
    Ingredient(i64),
    Find(String),
    Combos,
    SaveCombo { name: String, ingredients: String },
    UpdateCombo { id: i64, name: String, ingredients: String },
    DeleteCombo(i64),
    Favorites,
    Favorite(i64),
    Unfavorite(i64),
    Shopping,
    ShopAdd { ingredient_id: i64, quantity: String, note: Option<String> },
    ShopToggle(i64),
    ShopRemove(i64),
    Logout,
    Exit,
}

/// Lowercased listing of an enum's accepted values for usage messages.
fn known_values<T: IntoEnumIterator + std::fmt::Display>() -> String {
    T::iter().map(|v| v.to_string().to_lowercase()).collect::<Vec<_>>().join(", ")
}

impl Command {
    /// Parses one input line. `Ok(None)` for a blank line, `Err` with a
    /// usage message for anything malformed.
    fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(None);
        };
        let command = match keyword {
            "help" => Command::Help,
            "whoami" => Command::WhoAmI,
            "generate" => Self::parse_generate(&mut parts)?,
            "recipe" => Command::Recipe(Self::parse_id(parts.next(), "Usage: recipe <id>")?),
            "delete" => Command::DeleteRecipe(Self::parse_id(parts.next(), "Usage: delete <id>")?),
            "ingredients" => Command::Ingredients,
            "ingredient" => {
                Command::Ingredient(Self::parse_id(parts.next(), "Usage: ingredient <id>")?)
            }
            "find" => Command::Find(
                parts.next().map(String::from).ok_or_else(|| String::from("Usage: find <name>"))?,
            ),
            "combos" => Command::Combos,
            "combo-save" => {
                let (Some(name), Some(ingredients)) = (parts.next(), parts.next()) else {
                    return Err(String::from("Usage: combo-save <name> <ingredient,...>"));
                };
                Command::SaveCombo {
                    name: String::from(name),
                    ingredients: String::from(ingredients),
                }
            }
            "combo-update" => {
                const USAGE: &str = "Usage: combo-update <id> <name> <ingredient,...>";
                let id = Self::parse_id(parts.next(), USAGE)?;
                let (Some(name), Some(ingredients)) = (parts.next(), parts.next()) else {
                    return Err(String::from(USAGE));
                };
                Command::UpdateCombo {
                    id,
                    name: String::from(name),
                    ingredients: String::from(ingredients),
                }
            }
            "combo-del" => {
                Command::DeleteCombo(Self::parse_id(parts.next(), "Usage: combo-del <id>")?)
            }
            "favs" => Command::Favorites,
            "fav" => Command::Favorite(Self::parse_id(parts.next(), "Usage: fav <recipe-id>")?),
            "unfav" => {
                Command::Unfavorite(Self::parse_id(parts.next(), "Usage: unfav <recipe-id>")?)
            }
            "shopping" => Command::Shopping,
            "shop-add" => {
                const USAGE: &str = "Usage: shop-add <ingredient-id> <quantity> [note]";
                let ingredient_id = Self::parse_id(parts.next(), USAGE)?;
                let quantity =
                    parts.next().map(String::from).ok_or_else(|| String::from(USAGE))?;
                let rest = parts.collect::<Vec<_>>().join(" ");
                let note = if rest.is_empty() { None } else { Some(rest) };
                Command::ShopAdd { ingredient_id, quantity, note }
            }
            "shop-toggle" => {
                Command::ShopToggle(Self::parse_id(parts.next(), "Usage: shop-toggle <item-id>")?)
            }
            "shop-del" => {
                Command::ShopRemove(Self::parse_id(parts.next(), "Usage: shop-del <item-id>")?)
            }
            "logout" => Command::Logout,
            "exit" | "quit" => Command::Exit,
            other => return Err(format!("Unknown command {other}, try help")),
        };
        Ok(Some(command))
    }

    fn parse_id(raw: Option<&str>, usage: &str) -> Result<i64, String> {
        raw.and_then(|r| r.parse().ok()).ok_or_else(|| String::from(usage))
    }

    fn parse_generate(parts: &mut std::str::SplitWhitespace) -> Result<Command, String> {
        const USAGE: &str =
            "Usage: generate <cuisine> <minutes> <difficulty> <ingredient[:qty],...> [flavor,...]";
        let cuisine =
            parts.next().ok_or_else(|| String::from(USAGE))?.parse::<CuisineType>().map_err(
                |_| format!("Unknown cuisine, expected one of: {}", known_values::<CuisineType>()),
            )?;
        let minutes = parts
            .next()
            .and_then(|m| m.parse::<i32>().ok())
            .filter(|m| *m > 0)
            .ok_or_else(|| String::from(USAGE))?;
        let difficulty = parts
            .next()
            .ok_or_else(|| String::from(USAGE))?
            .parse::<DifficultyLevel>()
            .map_err(|_| {
                format!(
                    "Unknown difficulty, expected one of: {}",
                    known_values::<DifficultyLevel>()
                )
            })?;
        let ingredients =
            Self::parse_ingredient_list(parts.next().ok_or_else(|| String::from(USAGE))?)?;
        let flavors = match parts.next() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(|f| {
                    f.parse::<FlavorType>().map_err(|_| {
                        format!(
                            "Unknown flavor, expected one of: {}",
                            known_values::<FlavorType>()
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        Ok(Command::Generate { cuisine, minutes, difficulty, ingredients, flavors })
    }

    /// Splits `tofu:400g,scallion` into name/quantity pairs.
    fn parse_ingredient_list(raw: &str) -> Result<Vec<(String, Option<String>)>, String> {
        let mut list = Vec::new();
        for part in raw.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.split_once(':') {
                Some((name, quantity)) => {
                    list.push((String::from(name), Some(String::from(quantity))));
                }
                None => list.push((String::from(part), None)),
            }
        }
        if list.is_empty() {
            return Err(String::from("At least one ingredient is needed"));
        }
        Ok(list)
    }
}

impl HomeView {
    pub fn new() -> Self {
        Self {}
    }

    fn print_help() {
        println!("Commands:");
        println!("  whoami");
        println!(
            "  generate <cuisine> <minutes> <difficulty> <ingredient[:qty],...> [flavor,...]"
        );
        println!("  recipe <id>              delete <id>");
        println!("  ingredients              ingredient <id>         find <name>");
        println!("  combos                   combo-save <name> <ingredient,...>");
        println!("  combo-update <id> <name> <ingredient,...>");
        println!("  combo-del <id>");
        println!("  favs                     fav <recipe-id>         unfav <recipe-id>");
        println!("  shopping                 shop-add <ingredient-id> <quantity> [note]");
        println!("  shop-toggle <item-id>    shop-del <item-id>");
        println!("  logout                   exit");
        println!("cuisines: {}", known_values::<CuisineType>());
        println!("difficulties: {}", known_values::<DifficultyLevel>());
        println!("flavors: {}", known_values::<FlavorType>());
    }

    fn print_recipe_line(recipe: &Recipe) {
        println!(
            "#{:<4} {:<28} {:<12} {:>3} min  {}",
            recipe.id(),
            recipe.name(),
            recipe.cuisine_type().display_name(),
            recipe.cooking_time(),
            recipe.difficulty_level().display_name()
        );
    }

    fn print_recipe(recipe: &Recipe) {
        println!(
            "#{} {} - {}, {} min, {}",
            recipe.id(),
            recipe.name(),
            recipe.cuisine_type().display_name(),
            recipe.cooking_time(),
            recipe.difficulty_level().display_name()
        );
        let flavors = recipe.flavor_types();
        if !flavors.is_empty() {
            let joined =
                flavors.iter().map(|f| f.display_name()).collect::<Vec<_>>().join(", ");
            println!("flavors: {joined}");
        }
        if let Some(servings) = recipe.servings() {
            println!("serves {servings}");
        }
        if let Some(description) = recipe.description() {
            println!("{description}");
        }
        if !recipe.ingredients().is_empty() {
            println!("Ingredients:");
            for line in recipe.ingredients() {
                let optional = if line.is_required() { "" } else { " (optional)" };
                println!("  - {} {}{optional}", line.quantity(), line.name());
            }
        }
        if !recipe.steps().is_empty() {
            println!("Steps:");
            for step in recipe.steps() {
                match step.duration() {
                    Some(minutes) => println!(
                        "  {}. {} ({minutes} min)",
                        step.step_number(),
                        step.description()
                    ),
                    None => println!("  {}. {}", step.step_number(), step.description()),
                }
            }
        }
    }

    async fn dispatch(&self, keys: &Arc<Keychain>, command: Command) -> CommandOutcome {
        match self.execute(keys, command).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_unauthorized() => {
                error!("{e}");
                CommandOutcome::BackToLogin
            }
            Err(e) => {
                error!("{e}");
                CommandOutcome::Continue
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    async fn execute(
        &self,
        keys: &Arc<Keychain>,
        command: Command,
    ) -> Result<CommandOutcome, HTTPError> {
        match command {
            Command::Help => Self::print_help(),
            Command::WhoAmI => {
                let user = keys.acc_cont().user_info().await?;
                println!("#{} {}", user.id(), user.username());
                if let Some(email) = user.email() {
                    println!("email: {email}");
                }
                if let Some(created) = user.create_time() {
                    println!("member since {created}");
                }
            }
            Command::Generate { cuisine, minutes, difficulty, ingredients, flavors } => {
                let request = GenerateRecipesRequest {
                    ingredients: ingredients
                        .into_iter()
                        .map(|(name, quantity)| GenerateIngredient { name, quantity })
                        .collect(),
                    cuisine_type: cuisine,
                    flavor_types: if flavors.is_empty() { None } else { Some(flavors) },
                    cooking_time: minutes,
                    difficulty_level: difficulty,
                };
                println!("Generating, this can take a while...");
                for recipe in keys.rec_cont().generate(request).await? {
                    Self::print_recipe_line(&recipe);
                }
            }
            Command::Recipe(id) => Self::print_recipe(&keys.rec_cont().recipe_by_id(id).await?),
            Command::DeleteRecipe(id) => println!("{}", keys.rec_cont().delete_recipe(id).await?),
            Command::Ingredients => {
                for ingredient in keys.pan_cont().ingredients().await? {
                    println!(
                        "#{:<4} {:<24} {:<10} unit: {}",
                        ingredient.id(),
                        ingredient.name(),
                        ingredient.category().display_name(),
                        ingredient.common_unit().unwrap_or("-")
                    );
                }
            }
            Command::Ingredient(id) => {
                let ingredient = keys.pan_cont().ingredient_by_id(id).await?;
                println!(
                    "#{} {} ({})",
                    ingredient.id(),
                    ingredient.name(),
                    ingredient.category().display_name()
                );
                if let Some(unit) = ingredient.common_unit() {
                    println!("unit: {unit}");
                }
                if let Some(calories) = ingredient.calories() {
                    println!("calories: {calories} kcal/100g");
                }
            }
            Command::Find(name) => match keys.pan_cont().search_ingredient(&name).await? {
                Some(ingredient) => println!(
                    "#{} {} ({})",
                    ingredient.id(),
                    ingredient.name(),
                    ingredient.category().display_name()
                ),
                None => println!("No ingredient matching {name}."),
            },
            Command::Combos => {
                for combo in keys.pan_cont().combos().await? {
                    println!(
                        "#{:<4} {:<20} [{}]",
                        combo.id(),
                        combo.name(),
                        combo.ingredient_names().join(", ")
                    );
                }
            }
            Command::SaveCombo { name, ingredients } => {
                let combo = keys.pan_cont().save_combo(&name, &ingredients).await?;
                println!("Saved combo #{} {}", combo.id(), combo.name());
            }
            Command::UpdateCombo { id, name, ingredients } => {
                println!("{}", keys.pan_cont().update_combo(id, &name, &ingredients).await?);
            }
            Command::DeleteCombo(id) => println!("{}", keys.pan_cont().delete_combo(id).await?),
            Command::Favorites => {
                for entry in keys.rec_cont().favorites().await? {
                    match entry.recipe() {
                        Some(recipe) => println!(
                            "#{:<4} recipe #{} {}",
                            entry.id(),
                            recipe.id(),
                            recipe.name()
                        ),
                        None => println!("#{:<4} recipe #{}", entry.id(), entry.recipe_id()),
                    }
                }
            }
            Command::Favorite(recipe_id) => {
                if keys.rec_cont().is_favorited(recipe_id).await? {
                    println!("Recipe #{recipe_id} is already a favorite.");
                } else {
                    let entry = keys.rec_cont().add_favorite(recipe_id).await?;
                    println!("Favorited recipe #{}", entry.recipe_id());
                }
            }
            Command::Unfavorite(recipe_id) => {
                println!("{}", keys.rec_cont().remove_favorite(recipe_id).await?);
            }
            Command::Shopping => {
                for item in keys.pan_cont().shopping_list().await? {
                    let mark = if item.is_purchased() { "x" } else { " " };
                    let name = item.ingredient().map_or_else(
                        || format!("ingredient #{}", item.ingredient_id()),
                        |i| String::from(i.name()),
                    );
                    let note = item.note().map(|n| format!(" ({n})")).unwrap_or_default();
                    println!("[{mark}] #{:<4} {} {name}{note}", item.id(), item.quantity());
                }
            }
            Command::ShopAdd { ingredient_id, quantity, note } => {
                let item = keys
                    .pan_cont()
                    .add_shopping_item(ingredient_id, &quantity, note.as_deref())
                    .await?;
                println!("Added shopping item #{}", item.id());
            }
            Command::ShopToggle(id) => {
                println!("{}", keys.pan_cont().toggle_shopping_item(id).await?);
            }
            Command::ShopRemove(id) => {
                println!("{}", keys.pan_cont().remove_shopping_item(id).await?);
            }
            Command::Logout => {
                keys.acc_cont().logout();
                return Ok(CommandOutcome::BackToLogin);
            }
            Command::Exit => return Ok(CommandOutcome::Exit),
        }
        Ok(CommandOutcome::Continue)
    }
}

#[async_trait]
impl View for HomeView {
    fn type_name(&self) -> &'static str {
        "HomeView"
    }

    async fn run(&self, keys: Arc<Keychain>) -> ViewExitSignal {
        if let Some(user) = keys.session().user_info() {
            println!("Logged in as {}. Type help for commands.", user.username());
        }
        let mut events = keys.session().subscribe();
        let mut lines = stdin_lines();
        loop {
            prompt("recipegen> ");
            tokio::select! {
                line = lines.next_line() => {
                    let Ok(Some(line)) = line else {
                        return ViewExitSignal::Exit;
                    };
                    let command = match Command::parse(&line) {
                        Ok(Some(command)) => command,
                        Ok(None) => continue,
                        Err(usage) => {
                            warn!("{usage}");
                            continue;
                        }
                    };
                    match self.dispatch(&keys, command).await {
                        CommandOutcome::Continue => {}
                        CommandOutcome::BackToLogin => {
                            return ViewExitSignal::Navigate(Box::new(LoginView::new()));
                        }
                        CommandOutcome::Exit => return ViewExitSignal::Exit,
                    }
                }
                event = events.recv() => {
                    if let Ok(SessionEvent::RedirectLogin) = event {
                        warn!("Session expired, please log in again.");
                        return ViewExitSignal::Navigate(Box::new(LoginView::new()));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_quantities_and_flavors() {
        let command = Command::parse("generate sichuan 30 easy tofu:400g,scallion spicy,savory")
            .unwrap()
            .unwrap();
        match command {
            Command::Generate { cuisine, minutes, difficulty, ingredients, flavors } => {
                assert_eq!(cuisine, CuisineType::Sichuan);
                assert_eq!(minutes, 30);
                assert_eq!(difficulty, DifficultyLevel::Easy);
                assert_eq!(
                    ingredients,
                    vec![
                        (String::from("tofu"), Some(String::from("400g"))),
                        (String::from("scallion"), None),
                    ]
                );
                assert_eq!(flavors, vec![FlavorType::Spicy, FlavorType::Savory]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_flavors_are_optional() {
        let command = Command::parse("generate korean 45 hard kimchi").unwrap().unwrap();
        match command {
            Command::Generate { flavors, ingredients, .. } => {
                assert!(flavors.is_empty());
                assert_eq!(ingredients.len(), 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_cuisine_with_choices() {
        let err = Command::parse("generate klingon 30 easy tofu").unwrap_err();
        assert!(err.contains("chinese"));
    }

    #[test]
    fn rejects_non_positive_minutes() {
        assert!(Command::parse("generate sichuan 0 easy tofu").is_err());
        assert!(Command::parse("generate sichuan -5 easy tofu").is_err());
    }

    #[test]
    fn parses_ids_and_rejects_garbage() {
        assert_eq!(Command::parse("recipe 42").unwrap(), Some(Command::Recipe(42)));
        assert!(Command::parse("recipe tasty").is_err());
        assert_eq!(Command::parse("shop-toggle 7").unwrap(), Some(Command::ShopToggle(7)));
    }

    #[test]
    fn empty_line_is_no_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn shop_add_joins_note_words() {
        let command = Command::parse("shop-add 7 2 for the weekend").unwrap().unwrap();
        assert_eq!(
            command,
            Command::ShopAdd {
                ingredient_id: 7,
                quantity: String::from("2"),
                note: Some(String::from("for the weekend")),
            }
        );
    }

    #[test]
    fn quit_is_exit_alias() {
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Exit));
    }
}
