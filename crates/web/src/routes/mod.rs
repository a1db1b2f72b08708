//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Member console
//! GET  /                       - Redirect to /dashboard
//! POST /login                  - Sign in
//! POST /logout                 - Sign out, redirect to /login
//! POST /forgot-password        - Request a reset email
//! POST /reset-password         - Set a new password from a token
//! POST /change-password        - Change password (guarded)
//! POST /signup                 - Merchant self-registration
//! GET  /me                     - Signed-in principal (guarded)
//! GET  /navigation             - Sidebar of the principal's role (guarded)
//! GET  /dashboard, /customers, ... - Page shells (guarded)
//!
//! # Admin panel
//! Same shape under /admin, without /signup.
//! ```

pub mod auth;
pub mod pages;
pub mod signup;

use axum::{
    Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::middleware::request_id_middleware;
use crate::session::{AdminContext, MemberContext};
use crate::state::{AppState, HostedContext};

/// Body of the simulated account operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Build all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/signup", post(signup::sign_up))
        .merge(context_routes::<MemberContext>())
        .merge(context_routes::<AdminContext>())
}

/// Build the full application: routes, request tracing, and state.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Routes shared by both session contexts, mounted under the context prefix.
fn context_routes<K: HostedContext>() -> Router<AppState> {
    let path = |suffix: &str| format!("{}{suffix}", K::PREFIX);
    let root = if K::PREFIX.is_empty() {
        "/".to_owned()
    } else {
        K::PREFIX.to_owned()
    };

    let mut router = Router::new()
        .route(&root, get(pages::root::<K>))
        .route(&path("/login"), post(auth::login::<K>))
        .route(&path("/logout"), post(auth::logout::<K>))
        .route(&path("/forgot-password"), post(auth::forgot_password::<K>))
        .route(&path("/reset-password"), post(auth::reset_password::<K>))
        .route(&path("/change-password"), post(auth::change_password::<K>))
        .route(&path("/me"), get(pages::me::<K>))
        .route(&path("/navigation"), get(pages::navigation::<K>));

    for page in pages::guarded_paths::<K>() {
        router = router.route(page, get(pages::page::<K>));
    }

    router
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
