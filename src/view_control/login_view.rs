use super::home_view::HomeView;
use super::signal::ViewExitSignal;
use super::view::{View, prompt, stdin_lines};
use crate::keychain::Keychain;
use crate::{error, warn};
use async_trait::async_trait;
use std::sync::Arc;

/// Entry view: only account commands until a login succeeds.
pub struct LoginView {}

impl LoginView {
    pub fn new() -> Self {
        Self {}
    }

    fn print_help() {
        println!("Commands:");
        println!("  login <username> <password>");
        println!("  register <username> <password> [email]");
        println!("  help");
        println!("  exit");
    }
}

#[async_trait]
impl View for LoginView {
    fn type_name(&self) -> &'static str {
        "LoginView"
    }

    async fn run(&self, keys: Arc<Keychain>) -> ViewExitSignal {
        println!("Recipe Generator - please log in.");
        Self::print_help();
        let mut lines = stdin_lines();
        loop {
            prompt("login> ");
            let Ok(Some(line)) = lines.next_line().await else {
                return ViewExitSignal::Exit;
            };
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("login") => {
                    let (Some(username), Some(password)) = (parts.next(), parts.next()) else {
                        warn!("Usage: login <username> <password>");
                        continue;
                    };
                    match keys.acc_cont().login(username, password).await {
                        Ok(user) => {
                            println!("Welcome back, {}!", user.username());
                            return ViewExitSignal::Navigate(Box::new(HomeView::new()));
                        }
                        Err(e) => error!("Login failed: {e}"),
                    }
                }
                Some("register") => {
                    let (Some(username), Some(password)) = (parts.next(), parts.next()) else {
                        warn!("Usage: register <username> <password> [email]");
                        continue;
                    };
                    let email = parts.next();
                    match keys.acc_cont().register(username, password, email).await {
                        Ok(user) => {
                            println!("Account {} created, you can log in now.", user.username());
                        }
                        Err(e) => error!("Registration failed: {e}"),
                    }
                }
                Some("help") => Self::print_help(),
                Some("exit" | "quit") => return ViewExitSignal::Exit,
                Some(other) => warn!("Unknown command {other}, try help"),
                None => {}
            }
        }
    }
}
