#![allow(dead_code)]
// Stub auth service shared by the integration tests in this binary.
use axum::{
    Json, Router,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::post,
};
use serde_json::{Value, json};
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

pub const VALID_EMAIL: &str = "harry@hogwarts.uk";
pub const VALID_PASSWORD: &str = "Alohomora!";
pub const ISSUED_TOKEN: &str = "abc123";
// Emails that steer the stub into specific responses.
pub const GARBLED_EMAIL: &str = "garbled@hogwarts.uk";
pub const SLOW_EMAIL: &str = "slow@hogwarts.uk";
pub const TAKEN_EMAIL: &str = "taken@hogwarts.uk";
pub const CRASHING_EMAIL: &str = "crashing@hogwarts.uk";
pub const EMPTY_EMAIL: &str = "empty@hogwarts.uk";

static STUB_URL: OnceLock<String> = OnceLock::new();

// Start the stub once and return its base URL.
pub fn ensure_stub_auth() -> &'static str {
    STUB_URL.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // An OS thread with its own runtime outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral stub port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));
                axum::serve(listener, stub_router())
                    .await
                    .expect("stub server failed");
            });
        });
        wait_for_url_and_readiness(published_url)
    })
}

// Base URL of a port nothing listens on, for connection-refused cases.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

fn stub_router() -> Router {
    Router::new()
        .route("/login", post(stub_login))
        .route("/signup", post(stub_signup))
}

// Json<Value> only accepts application/json bodies, so a 2xx here also proves the content type.
async fn stub_login(Json(body): Json<Value>) -> axum::response::Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match email {
        SLOW_EMAIL => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (StatusCode::OK, Json(json!({ "token": ISSUED_TOKEN }))).into_response()
        }
        GARBLED_EMAIL => (StatusCode::OK, "not json").into_response(),
        CRASHING_EMAIL => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<html><body>oops</body></html>"),
        )
            .into_response(),
        EMPTY_EMAIL => StatusCode::NO_CONTENT.into_response(),
        VALID_EMAIL if password == VALID_PASSWORD => {
            (StatusCode::OK, Json(json!({ "token": ISSUED_TOKEN }))).into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid credentials" })),
        )
            .into_response(),
    }
}

async fn stub_signup(Json(body): Json<Value>) -> StatusCode {
    let has_camel_case_names = body["firstName"].is_string() && body["lastName"].is_string();
    if !has_camel_case_names {
        return StatusCode::BAD_REQUEST;
    }

    match body["email"].as_str() {
        Some(TAKEN_EMAIL) => StatusCode::CONFLICT,
        Some(_) => StatusCode::CREATED,
        None => StatusCode::BAD_REQUEST,
    }
}

fn wait_for_url_and_readiness(published_url: Arc<OnceLock<String>>) -> String {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://")
        .to_string();

    for _ in 0..100 {
        if std::net::TcpStream::connect(&addr).is_ok() {
            return base_url;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("stub auth service did not become ready in time");
}
