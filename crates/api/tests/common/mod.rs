#![allow(dead_code)]

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use orchard_db::models::apple::Apple;
use orchard_db::store::AppleStore;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use orchard_api::config::{LogFormat, ServerConfig};
use orchard_api::router::build_app_router;
use orchard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        database_url: "postgres://orchard@127.0.0.1:1/orchard".to_string(),
        db_max_connections: 1,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

// ---------------------------------------------------------------------------
// Fake stores
// ---------------------------------------------------------------------------

/// In-memory store returning a fixed list of apples.
pub struct FakeAppleStore {
    apples: Vec<Apple>,
}

impl FakeAppleStore {
    pub fn new(apples: Vec<Apple>) -> Self {
        Self { apples }
    }
}

#[async_trait]
impl AppleStore for FakeAppleStore {
    async fn list_all(&self) -> Result<Vec<Apple>, sqlx::Error> {
        Ok(self.apples.clone())
    }
}

/// Store whose every read fails with the given error constructor.
pub struct FailingAppleStore {
    make_error: fn() -> sqlx::Error,
}

impl FailingAppleStore {
    pub fn new(make_error: fn() -> sqlx::Error) -> Self {
        Self { make_error }
    }
}

#[async_trait]
impl AppleStore for FailingAppleStore {
    async fn list_all(&self) -> Result<Vec<Apple>, sqlx::Error> {
        Err((self.make_error)())
    }
}

/// Build an apple row with deterministic timestamps.
pub fn apple(id: i64, name: &str, color: &str, photo_url: &str) -> Apple {
    let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    Apple {
        id,
        name: name.to_string(),
        color: color.to_string(),
        photo_url: photo_url.to_string(),
        created_at: ts,
        updated_at: ts,
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// A pool pointing at a closed port; it never connects, so the health check
/// reports the database as down without the test needing PostgreSQL.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy(&test_config().database_url)
        .unwrap()
}

/// Build the full application router around the given apple store.
///
/// Uses the same middleware stack production does.
pub fn build_test_app(store: impl AppleStore + 'static) -> Router {
    let state = AppState {
        pool: unreachable_pool(),
        apples: Arc::new(store),
    };
    build_app_router(state, &test_config())
}

/// Build the full application router backed by a real database pool.
pub fn build_db_app(pool: PgPool) -> Router {
    let state = AppState {
        pool: pool.clone(),
        apples: Arc::new(orchard_db::store::PgAppleStore::new(pool)),
    };
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
