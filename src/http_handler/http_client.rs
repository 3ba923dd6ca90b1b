use crate::session::SessionStore;
use std::sync::Arc;
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the recipe service.
/// It sets a fixed timeout and holds the session store so each request
/// can attach the stored bearer token.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Local credential store consulted on every send.
    session: Arc<SessionStore>,
}

impl HTTPClient {
    /// Default per-request timeout. Recipe generation waits on a language
    /// model upstream, so this is deliberately generous.
    pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Constructs a new `HTTPClient` with the given base URL and the
    /// default request timeout.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8080/api"`).
    pub(crate) fn new(base_url: &str, session: Arc<SessionStore>) -> HTTPClient {
        Self::with_timeout(base_url, session, Self::DEFAULT_TIMEOUT)
    }

    /// Constructs a new `HTTPClient` with an explicit request timeout.
    pub(crate) fn with_timeout(
        base_url: &str,
        session: Arc<SessionStore>,
        timeout: Duration,
    ) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().timeout(timeout).build().unwrap(),
            base_url: String::from(base_url),
            session,
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client {
        &self.client
    }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str {
        self.base_url.as_str()
    }
    /// Returns the session store backing this client.
    pub(crate) fn session(&self) -> &SessionStore {
        &self.session
    }
}
