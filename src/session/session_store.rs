use crate::http_handler::http_handler_common::UserInfo;
use crate::{event, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tokio::sync::broadcast;

/// Signals emitted when the stored credentials change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
    /// Credentials were rejected by the service and have been dropped;
    /// whoever drives the UI should get back to the login view.
    RedirectLogin,
}

/// On-disk shape of the session file.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct SessionData {
    token: Option<String>,
    user_info: Option<UserInfo>,
}

/// Local credential store backing the HTTP client: holds the bearer
/// token and the cached account info, persisted to a small JSON file so
/// a login survives restarts.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    data: RwLock<SessionData>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    const EVENT_CHANNEL_CAPACITY: usize = 10;

    /// Opens the store at `path`, loading a previously persisted session
    /// when one exists. An unreadable file is discarded.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = Self::load(&path);
        let (events, _) = broadcast::channel(Self::EVENT_CHANNEL_CAPACITY);
        Self { path, data: RwLock::new(data), events }
    }

    /// Resolves the session file location: `RECIPEGEN_SESSION_FILE` if
    /// set, otherwise a fixed spot under the platform data directory.
    pub fn default_path() -> PathBuf {
        std::env::var("RECIPEGEN_SESSION_FILE").map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("recipegen")
                    .join("session.json")
            },
            PathBuf::from,
        )
    }

    fn load(path: &Path) -> SessionData {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable session file {}: {e}", path.display());
                SessionData::default()
            }),
            Err(_) => SessionData::default(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.data.read().unwrap().token.clone()
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.data.read().unwrap().user_info.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.data.read().unwrap().token.is_some()
    }

    /// Stores a fresh login and persists it.
    pub fn store_login(&self, token: String, user: UserInfo) {
        {
            let mut data = self.data.write().unwrap();
            data.token = Some(token);
            data.user_info = Some(user);
            self.persist(&data);
        }
        self.emit(SessionEvent::LoggedIn);
    }

    /// Refreshes the cached account info without touching the token.
    pub fn store_user(&self, user: UserInfo) {
        let mut data = self.data.write().unwrap();
        data.user_info = Some(user);
        self.persist(&data);
    }

    /// Drops the session on explicit logout.
    pub fn clear(&self) {
        self.wipe();
        self.emit(SessionEvent::LoggedOut);
    }

    /// Drops the session after the service rejected the token and tells
    /// subscribers to navigate back to the login view.
    pub fn expire(&self) {
        self.wipe();
        self.emit(SessionEvent::RedirectLogin);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn wipe(&self) {
        let mut data = self.data.write().unwrap();
        data.token = None;
        data.user_info = None;
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }

    fn emit(&self, ev: SessionEvent) {
        event!("Session event: {ev}");
        // Nobody listening is fine, e.g. during login from a fresh start.
        let _ = self.events.send(ev);
    }

    fn persist(&self, data: &SessionData) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(data) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!("Could not persist session file {}: {e}", self.path.display());
                }
            }
            Err(e) => warn!("Could not serialize session state: {e}"),
        }
    }
}
