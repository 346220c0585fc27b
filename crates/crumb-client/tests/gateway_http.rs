//! Gateway tests against a canned loopback HTTP server.

use std::sync::mpsc;

use pretty_assertions::assert_eq;

use crumb_client::{
    ApiError, FALLBACK_ERROR_MESSAGE, Gateway, NETWORK_ERROR_MESSAGE, SessionStore,
    UNKNOWN_ERROR_MESSAGE,
};
use crumb_core::enums::TaskStatus;

struct Captured {
    method: String,
    url: String,
    authorization: Option<String>,
}

struct TestServer {
    base_url: String,
    requests: mpsc::Receiver<Captured>,
}

/// Serve the given `(status, body)` responses in order, capturing each request.
fn spawn_server(responses: Vec<(u16, &'static str)>) -> TestServer {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("ip listener")
        .port();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        for (status, body) in responses {
            let Ok(request) = server.recv() else { break };
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            let _ = tx.send(Captured {
                method: request.method().to_string(),
                url: request.url().to_string(),
                authorization,
            });
            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("content-type header");
            let _ = request.respond(
                tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header),
            );
        }
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{port}/api"),
        requests: rx,
    }
}

fn session_in(dir: &tempfile::TempDir, name: &str) -> SessionStore {
    SessionStore::new(format!("crumb-test-{name}"), dir.path().join("credentials"))
}

const TASK_JSON: &str = r#"{
    "id": "t1",
    "title": "Bake sourdough batch",
    "status": "pending",
    "priority": "high",
    "due_date": "2024-01-10T00:00:00Z",
    "created_at": "2024-01-05T08:00:00Z",
    "updated_at": "2024-01-05T08:00:00Z"
}"#;

#[tokio::test]
async fn bearer_token_attached_when_session_has_one() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let session = session_in(&tmp, "bearer");
    std::fs::write(session.credentials_path(), "token_abc").expect("seed token");

    let server = spawn_server(vec![(200, "[]")]);
    let gateway = Gateway::new(&server.base_url, 5, session).expect("gateway");

    let tasks = gateway.list_tasks().await.expect("list tasks");
    assert!(tasks.is_empty());

    let captured = server.requests.recv().expect("request captured");
    assert_eq!(captured.method, "GET");
    assert_eq!(captured.url, "/api/tasks");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer token_abc"));
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let server = spawn_server(vec![(200, "[]")]);
    let gateway =
        Gateway::new(&server.base_url, 5, session_in(&tmp, "no-token")).expect("gateway");

    let _tasks = gateway.list_projects().await.expect("list projects");

    let captured = server.requests.recv().expect("request captured");
    assert_eq!(captured.authorization, None);
}

#[tokio::test]
async fn success_payload_decodes_into_entities() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let body: &'static str = Box::leak(format!("[{TASK_JSON}]").into_boxed_str());
    let server = spawn_server(vec![(200, body)]);
    let gateway = Gateway::new(&server.base_url, 5, session_in(&tmp, "decode")).expect("gateway");

    let tasks = gateway.list_tasks().await.expect("list tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, "t1");
    assert_eq!(tasks[0].status, TaskStatus::Pending);
}

#[tokio::test]
async fn backend_message_is_surfaced_verbatim_on_4xx() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let server = spawn_server(vec![(404, r#"{"message": "Task not found"}"#)]);
    let gateway =
        Gateway::new(&server.base_url, 5, session_in(&tmp, "not-found")).expect("gateway");

    let error = gateway.task("missing").await.expect_err("should fail");
    assert_eq!(error.message(), "Task not found");
    assert!(matches!(error, ApiError::Validation { status: 404, .. }));
}

#[tokio::test]
async fn structured_body_without_message_gets_synthesized_one() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let server = spawn_server(vec![(500, "{}")]);
    let gateway =
        Gateway::new(&server.base_url, 5, session_in(&tmp, "synthesized")).expect("gateway");

    let error = gateway.list_tasks().await.expect_err("should fail");
    assert_eq!(error.message(), FALLBACK_ERROR_MESSAGE);
    assert!(matches!(error, ApiError::Server { status: 500, .. }));
}

#[tokio::test]
async fn empty_error_body_gets_unknown_error_message() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let server = spawn_server(vec![(502, "")]);
    let gateway = Gateway::new(&server.base_url, 5, session_in(&tmp, "empty")).expect("gateway");

    let error = gateway.list_tasks().await.expect_err("should fail");
    assert_eq!(error.message(), UNKNOWN_ERROR_MESSAGE);
}

#[tokio::test]
async fn connection_failure_yields_fixed_network_message() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    // Bind then immediately drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let gateway = Gateway::new(
        format!("http://127.0.0.1:{port}/api"),
        1,
        session_in(&tmp, "network"),
    )
    .expect("gateway");

    let error = gateway.list_tasks().await.expect_err("should fail");
    assert_eq!(error.message(), NETWORK_ERROR_MESSAGE);
    assert!(matches!(error, ApiError::Network { .. }));
}

#[tokio::test]
async fn unauthorized_clears_token_and_redirects_exactly_once() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let session = session_in(&tmp, "unauthorized");
    std::fs::write(session.credentials_path(), "stale_token").expect("seed token");

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let server = spawn_server(vec![
        (401, r#"{"message": "Token expired"}"#),
        (401, r#"{"message": "Token expired"}"#),
    ]);
    let gateway = Gateway::new(&server.base_url, 5, session)
        .expect("gateway")
        .with_unauthorized_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    let error = gateway.list_tasks().await.expect_err("first 401");
    assert!(matches!(error, ApiError::Auth { .. }));
    assert_eq!(error.message(), "Token expired");
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(
        gateway.session().load().is_none(),
        "token cleared after 401"
    );

    // Second 401 while already on /login: token stays cleared, no second redirect
    let _error = gateway.list_tasks().await.expect_err("second 401");
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn login_persists_token_for_subsequent_requests() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let login_body: &'static str = r#"{"token": "fresh_token", "user": {
        "id": "u1", "name": "Rosa", "email": "rosa@bakery.test",
        "role": "employee", "created_at": "2024-01-01T00:00:00Z"
    }}"#;
    let server = spawn_server(vec![(200, login_body), (200, "[]")]);
    let gateway = Gateway::new(&server.base_url, 5, session_in(&tmp, "login")).expect("gateway");

    let response = gateway
        .login("rosa@bakery.test", "hunter2")
        .await
        .expect("login");
    assert_eq!(response.user.name, "Rosa");
    assert_eq!(gateway.session().load().as_deref(), Some("fresh_token"));

    // Next request carries the fresh token
    let _tasks = gateway.list_tasks().await.expect("list tasks");
    let _login_request = server.requests.recv().expect("login captured");
    let list_request = server.requests.recv().expect("list captured");
    assert_eq!(
        list_request.authorization.as_deref(),
        Some("Bearer fresh_token")
    );

    gateway.logout().expect("logout");
    assert!(gateway.session().load().is_none());
}

#[tokio::test]
async fn status_update_decodes_reward_envelope() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let body: &'static str = Box::leak(
        format!(
            r#"{{"task": {TASK_JSON}, "reward_info": {{"points_earned": 10, "is_late": false, "current_streak": 1}}}}"#
        )
        .into_boxed_str(),
    );
    let server = spawn_server(vec![(200, body)]);
    let gateway = Gateway::new(&server.base_url, 5, session_in(&tmp, "status")).expect("gateway");

    let envelope = gateway
        .update_task_status("t1", TaskStatus::Completed)
        .await
        .expect("status update");
    let reward = envelope.reward_info.expect("reward info");
    assert_eq!(reward.points_earned, 10);
    assert!(!reward.is_late);

    let captured = server.requests.recv().expect("request captured");
    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.url, "/api/tasks/t1/status");
}
