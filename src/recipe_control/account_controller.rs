use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::{HTTPError, UserInfo},
    http_request::{
        login_post::LoginRequest,
        register_post::RegisterRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
        user_info_get::UserInfoRequest,
    },
};
use crate::info;
use crate::session::SessionStore;
use std::sync::Arc;

/// Account lifecycle: register, login, logout and refreshing the cached
/// user info. A successful login lands in the session store, so every
/// following request carries the bearer token.
pub struct AccountController {
    client: Arc<HTTPClient>,
    session: Arc<SessionStore>,
}

impl AccountController {
    pub fn new(client: Arc<HTTPClient>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, HTTPError> {
        let request = LoginRequest {
            username: String::from(username),
            password: String::from(password),
        };
        let envelope = request.send_request(&self.client).await?;
        let (token, user) = envelope.into_data().into_parts();
        self.session.store_login(token, user.clone());
        info!("Logged in as {}", user.username());
        Ok(user)
    }

    /// Creates an account. Logging in stays a separate step.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<UserInfo, HTTPError> {
        let request = RegisterRequest {
            username: String::from(username),
            password: String::from(password),
            email: email.map(String::from),
        };
        let envelope = request.send_request(&self.client).await?;
        info!("{}", envelope.message());
        Ok(envelope.into_data())
    }

    /// Fetches the account info of the logged-in user and refreshes the
    /// cached copy.
    pub async fn user_info(&self) -> Result<UserInfo, HTTPError> {
        let envelope = (UserInfoRequest {}).send_request(&self.client).await?;
        let user = envelope.into_data();
        self.session.store_user(user.clone());
        Ok(user)
    }

    /// Local-only logout; the service keeps no session state.
    pub fn logout(&self) {
        self.session.clear();
        info!("Logged out");
    }
}
