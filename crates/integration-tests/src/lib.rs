//! Integration tests for the LoyaltyPro console service.
//!
//! The tests drive the full router in-process with `tower::ServiceExt`, so
//! no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p loyalty-pro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `member_session` - Member console sign-in, guards, account flows
//! - `admin_session` - Admin panel and its isolation from the member console
//! - `persistence` - Sessions surviving a restart

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use loyalty_pro_web::config::WebConfig;
use loyalty_pro_web::routes;
use loyalty_pro_web::session::{FileStorage, MemoryStorage, SessionStorage, SimulatedLatency};
use loyalty_pro_web::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub use loyalty_pro_web::services::auth::accounts::{ADMIN_DEMO_PASSWORD, MEMBER_DEMO_PASSWORD};

/// An in-process instance of the service.
#[derive(Clone)]
pub struct TestApp {
    state: AppState,
    router: Router,
}

impl TestApp {
    /// Fresh service over in-memory storage, without simulated delays.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()), SimulatedLatency::NONE)
    }

    /// Service persisting to `dir`, as the binary does.
    #[must_use]
    pub fn on_disk(dir: &Path) -> Self {
        Self::with_storage(Arc::new(FileStorage::new(dir)), SimulatedLatency::NONE)
    }

    /// Service over any storage and latency.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn SessionStorage>, latency: SimulatedLatency) -> Self {
        let config = WebConfig {
            latency,
            ..WebConfig::default()
        };
        let state = AppState::new(config, storage).unwrap();
        Self {
            router: routes::app(state.clone()),
            state,
        }
    }

    /// Shared state, for asserting on sessions directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request through the router.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST `path` without a body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.send(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST `body` as JSON to `path`.
    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        self.send(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Sign in through `login_path`.
    pub async fn login(&self, login_path: &str, email: &str, password: &str) -> TestResponse {
        self.post_json(
            login_path,
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// The body parsed as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// The body as text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}
