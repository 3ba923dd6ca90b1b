use crate::http_handler::http_client::HTTPClient;
use crate::recipe_control::{AccountController, PantryController, RecipeController};
use crate::session::SessionStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, the session store and the controllers
/// built on top of them.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The local session store holding token and cached user info.
    session: Arc<SessionStore>,
    /// The account controller for login, registration and user info.
    acc_cont: Arc<AccountController>,
    /// The recipe controller for generation, lookup and favorites.
    rec_cont: Arc<RecipeController>,
    /// The pantry controller for ingredients, combos and shopping list.
    pan_cont: Arc<PantryController>,
}

impl Keychain {
    /// Creates a new instance of `Keychain`.
    ///
    /// # Arguments
    /// - `url`: The base URL to initialize the HTTP client.
    /// - `session_file`: Location of the persisted session.
    ///
    /// # Returns
    /// A new instance of `Keychain` containing initialized subsystems.
    pub fn new(url: &str, session_file: PathBuf) -> Self {
        let session = Arc::new(SessionStore::open(session_file));
        let client = Arc::new(HTTPClient::new(url, Arc::clone(&session)));
        let acc_cont =
            Arc::new(AccountController::new(Arc::clone(&client), Arc::clone(&session)));
        let rec_cont = Arc::new(RecipeController::new(Arc::clone(&client)));
        let pan_cont = Arc::new(PantryController::new(Arc::clone(&client)));
        Self { client, session, acc_cont, rec_cont, pan_cont }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> {
        Arc::clone(&self.client)
    }

    /// Provides a cloned reference to the session store.
    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    /// Provides a cloned reference to the account controller.
    pub fn acc_cont(&self) -> Arc<AccountController> {
        Arc::clone(&self.acc_cont)
    }

    /// Provides a cloned reference to the recipe controller.
    pub fn rec_cont(&self) -> Arc<RecipeController> {
        Arc::clone(&self.rec_cont)
    }

    /// Provides a cloned reference to the pantry controller.
    pub fn pan_cont(&self) -> Arc<PantryController> {
        Arc::clone(&self.pan_cont)
    }
}
