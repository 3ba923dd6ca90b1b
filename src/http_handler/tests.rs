use super::http_client::HTTPClient;
use super::http_handler_common::UserInfo;
use super::http_request::delete_recipe_delete::DeleteRecipeRequest;
use super::http_request::ingredient_search_get::IngredientSearchRequest;
use super::http_request::login_post::LoginRequest;
use super::http_request::request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType};
use super::http_request::user_info_get::UserInfoRequest;
use crate::recipe_control::AccountController;
use crate::session::{SessionEvent, SessionStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

fn temp_session() -> (Arc<SessionStore>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::open(dir.path().join("session.json")));
    (store, dir)
}

fn sample_user(username: &str) -> UserInfo {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "username": username,
        "email": "m@example.com"
    }))
    .unwrap()
}

fn success_envelope(data: &str) -> String {
    format!(r#"{{"code": 200, "message": "ok", "data": {data}}}"#)
}

/// Serves exactly one canned HTTP response and hands back the raw
/// request bytes it saw.
async fn spawn_service(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    let reply = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(reply.as_bytes()).await.unwrap();
        let _ = tx.send(request);
    });
    (format!("http://{addr}/api"), rx)
}

/// Accepts one connection but only answers after `delay`, long after the
/// client under test has given up.
async fn spawn_stalled_service(delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let _ = read_request(&mut socket).await;
        tokio::time::sleep(delay).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n")
            .await;
    });
    format!("http://{addr}/api")
}

/// Reads one request off the socket, honoring Content-Length so JSON
/// bodies are captured in full.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(head_end) = find_subslice(&buffer, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buffer[..head_end]);
            let mut content_length = 0_usize;
            for line in head.lines() {
                let lower = line.to_ascii_lowercase();
                if let Some(value) = lower.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            if buffer.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buffer).to_string()
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[tokio::test]
async fn get_unwraps_success_envelope() {
    let body = success_envelope(r#"{"id": 3, "username": "maria", "email": "m@example.com"}"#);
    let (url, seen) = spawn_service("200 OK", &body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let envelope = (UserInfoRequest {}).send_request(&client).await.unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.message(), "ok");
    assert_eq!(envelope.data().username(), "maria");

    let raw = seen.await.unwrap();
    assert!(raw.starts_with("GET /api/user/info HTTP/1.1"));
}

#[tokio::test]
async fn attaches_stored_bearer_token() {
    let body = success_envelope(r#"{"id": 3, "username": "maria"}"#);
    let (url, seen) = spawn_service("200 OK", &body).await;
    let (session, _dir) = temp_session();
    session.store_login(String::from("tok-123"), sample_user("maria"));
    let client = HTTPClient::new(&url, session);

    (UserInfoRequest {}).send_request(&client).await.unwrap();

    let raw = seen.await.unwrap().to_ascii_lowercase();
    assert!(raw.contains("authorization: bearer tok-123"));
}

#[tokio::test]
async fn sends_no_auth_header_without_token() {
    let body = success_envelope(r#"{"id": 3, "username": "maria"}"#);
    let (url, seen) = spawn_service("200 OK", &body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    (UserInfoRequest {}).send_request(&client).await.unwrap();

    let raw = seen.await.unwrap().to_ascii_lowercase();
    assert!(!raw.contains("authorization:"));
}

#[tokio::test]
async fn posts_login_as_json() {
    let body =
        success_envelope(r#"{"token": "tok-9", "userInfo": {"id": 3, "username": "maria"}}"#);
    let (url, seen) = spawn_service("200 OK", &body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let request = LoginRequest {
        username: String::from("maria"),
        password: String::from("hunter2"),
    };
    let envelope = request.send_request(&client).await.unwrap();
    assert_eq!(envelope.data().token(), "tok-9");

    let raw = seen.await.unwrap();
    assert!(raw.starts_with("POST /api/auth/login HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.contains(r#""username":"maria""#));
    assert!(raw.contains(r#""password":"hunter2""#));
}

#[tokio::test]
async fn search_sends_query_and_decodes_null_hit() {
    let body = success_envelope("null");
    let (url, seen) = spawn_service("200 OK", &body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let request = IngredientSearchRequest { name: String::from("scallion") };
    let envelope = request.send_request(&client).await.unwrap();
    assert!(envelope.data().is_none());

    let raw = seen.await.unwrap();
    assert!(raw.starts_with("GET /api/ingredients/search?name=scallion HTTP/1.1"));
}

#[tokio::test]
async fn message_only_endpoint_surfaces_service_message() {
    let body = r#"{"code": 200, "message": "recipe deleted", "data": null}"#;
    let (url, seen) = spawn_service("200 OK", body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let envelope = (DeleteRecipeRequest { id: 12 }).send_request(&client).await.unwrap();
    assert_eq!(envelope.message(), "recipe deleted");

    let raw = seen.await.unwrap();
    assert!(raw.starts_with("DELETE /api/recipes/12 HTTP/1.1"));
}

#[tokio::test]
async fn service_failure_rides_in_http_200() {
    let body = r#"{"code": 500, "message": "no recipes could be generated", "data": null}"#;
    let (url, _seen) = spawn_service("200 OK", body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "no recipes could be generated");
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn http_error_prefers_payload_message() {
    let body = r#"{"message": "combo name must not be empty"}"#;
    let (url, _seen) = spawn_service("400 Bad Request", body).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let err = (DeleteRecipeRequest { id: 7 }).send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "combo name must not be empty");
}

#[tokio::test]
async fn http_error_falls_back_to_status_reason() {
    let (url, _seen) = spawn_service("503 Service Unavailable", "<html>down</html>").await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn unusable_error_response_reports_generic_failure() {
    let (url, _seen) = spawn_service("599 Whatever", "junk").await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "request failed");
}

#[tokio::test]
async fn unauthorized_drops_session_and_redirects() {
    let body = r#"{"message": "token expired"}"#;
    let (url, _seen) = spawn_service("401 Unauthorized", body).await;
    let (session, _dir) = temp_session();
    session.store_login(String::from("tok-old"), sample_user("maria"));
    let mut events = session.subscribe();
    let client = HTTPClient::new(&url, Arc::clone(&session));

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "token expired");
    assert!(!session.is_logged_in());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::RedirectLogin);
}

#[tokio::test]
async fn unauthorized_without_payload_message_gets_default() {
    let (url, _seen) = spawn_service("401 Unauthorized", "{}").await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "unauthorized");
}

#[tokio::test]
async fn slow_service_times_out() {
    let url = spawn_stalled_service(Duration::from_secs(5)).await;
    let (session, _dir) = temp_session();
    let client = HTTPClient::with_timeout(&url, session, Duration::from_millis(200));

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "request timed out");
}

#[tokio::test]
async fn refused_connection_reports_no_connection() {
    // Bind then drop to get a local port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api", listener.local_addr().unwrap());
    drop(listener);
    let (session, _dir) = temp_session();
    let client = HTTPClient::new(&url, session);

    let err = (UserInfoRequest {}).send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "no connection to the recipe service");
}

#[tokio::test]
async fn login_flow_lands_in_session_store() {
    let body = success_envelope(
        r#"{"token": "tok-9", "userInfo": {"id": 3, "username": "maria", "email": "m@example.com"}}"#,
    );
    let (url, seen) = spawn_service("200 OK", &body).await;
    let (session, _dir) = temp_session();
    let client = Arc::new(HTTPClient::new(&url, Arc::clone(&session)));
    let account = AccountController::new(client, Arc::clone(&session));

    let user = account.login("maria", "hunter2").await.unwrap();
    assert_eq!(user.username(), "maria");
    assert_eq!(session.token().as_deref(), Some("tok-9"));
    assert_eq!(session.user_info().unwrap().username(), "maria");

    let raw = seen.await.unwrap();
    assert!(raw.starts_with("POST /api/auth/login HTTP/1.1"));
}
