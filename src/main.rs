#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod http_handler;
mod keychain;
mod logger;
mod recipe_control;
mod session;
mod view_control;

use crate::keychain::Keychain;
use crate::session::SessionStore;
use crate::view_control::{HomeView, LoginView, View, ViewExitSignal};
use std::{env, sync::Arc};

const DEF_BASE_URL: &str = "http://localhost:8080/api";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let base_url_var = env::var("RECIPEGEN_BASE_URL");
    let base_url = base_url_var.as_ref().map_or(DEF_BASE_URL, |v| v.as_str());
    let keys = Arc::new(init(base_url));
    info!("Talking to the recipe service at {base_url}.");

    // A persisted session skips the login view until the service says
    // otherwise.
    let mut view: Box<dyn View> = if keys.session().is_logged_in() {
        Box::new(HomeView::new())
    } else {
        Box::new(LoginView::new())
    };
    loop {
        info!("Entering {}.", view.type_name());
        match view.run(Arc::clone(&keys)).await {
            ViewExitSignal::Navigate(next) => view = next,
            ViewExitSignal::Exit => break,
        }
    }
    info!("Goodbye!");
}

fn init(url: &str) -> Keychain {
    Keychain::new(url, SessionStore::default_path())
}
