#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::env;
use std::fs;
use std::path::PathBuf;
use stockform::db::pool::DbPool;
use stockform::db::queries::{insert_item, load_items};
use stockform::forms::csrf::CsrfGuard;
use stockform::models::item::{Item, NewItem};
use stockform::web::{self, AppState};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

pub fn sf() -> Command {
    cargo_bin_cmd!("stockform")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stockform.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh database with the schema in place.
pub fn open_test_pool(name: &str) -> DbPool {
    DbPool::open(setup_test_db(name)).expect("open test db")
}

pub fn state(pool: &DbPool, csrf_enabled: bool) -> AppState {
    AppState::new(pool.clone(), CsrfGuard::new(TEST_SECRET, 3600, csrf_enabled))
}

pub fn all_items(pool: &DbPool) -> Vec<Item> {
    pool.with_session(|tx| load_items(tx)).expect("load items")
}

/// Insert directly through the library, bypassing the HTTP layer.
pub fn seed(pool: &DbPool, name: &str, quantity: i64, description: &str) -> Item {
    let new_item = NewItem::stamped(name.to_string(), quantity, description.to_string());
    pool.with_session(|tx| insert_item(tx, &new_item))
        .expect("insert item")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Send one request through a freshly built router.
pub async fn send(state: &AppState, req: Request<Body>) -> TestResponse {
    let resp = web::router(state.clone())
        .oneshot(req)
        .await
        .expect("router is infallible");

    let status = resp.status();
    let header_str = |name: header::HeaderName| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let location = header_str(header::LOCATION);
    let content_type = header_str(header::CONTENT_TYPE);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");

    TestResponse {
        status,
        location,
        content_type,
        body: String::from_utf8_lossy(&bytes).to_string(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .expect("build request")
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).expect("encode form fields")
}

/// Pull the hidden CSRF token out of a rendered form.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let marker = "name=\"csrf_token\" value=\"";
    let start = html.find(marker)? + marker.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}
