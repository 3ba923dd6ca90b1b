use super::{SessionEvent, SessionStore};
use crate::http_handler::http_handler_common::UserInfo;

fn sample_user(username: &str) -> UserInfo {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "username": username,
        "email": "m@example.com"
    }))
    .unwrap()
}

#[test]
fn starts_empty_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::open(dir.path().join("session.json"));
    assert!(store.token().is_none());
    assert!(store.user_info().is_none());
    assert!(!store.is_logged_in());
}

#[test]
fn login_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    {
        let store = SessionStore::open(&path);
        store.store_login(String::from("tok-1"), sample_user("maria"));
        assert!(store.is_logged_in());
    }
    let reopened = SessionStore::open(&path);
    assert_eq!(reopened.token().as_deref(), Some("tok-1"));
    assert_eq!(reopened.user_info().unwrap().username(), "maria");
}

#[test]
fn clear_removes_file_and_signals_logout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = SessionStore::open(&path);
    store.store_login(String::from("tok-1"), sample_user("maria"));
    assert!(path.exists());

    let mut events = store.subscribe();
    store.clear();
    assert!(store.token().is_none());
    assert!(!path.exists());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::LoggedOut);
}

#[test]
fn expire_signals_redirect_to_login() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::open(dir.path().join("session.json"));
    store.store_login(String::from("tok-1"), sample_user("maria"));

    let mut events = store.subscribe();
    store.expire();
    assert!(!store.is_logged_in());
    assert!(store.user_info().is_none());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::RedirectLogin);
}

#[test]
fn corrupt_file_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "definitely not json").unwrap();
    let store = SessionStore::open(&path);
    assert!(!store.is_logged_in());
}

#[test]
fn store_user_refreshes_cached_info() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::open(dir.path().join("session.json"));
    store.store_login(String::from("tok-1"), sample_user("maria"));
    store.store_user(sample_user("max"));
    assert_eq!(store.user_info().unwrap().username(), "max");
    assert_eq!(store.token().as_deref(), Some("tok-1"));
}
