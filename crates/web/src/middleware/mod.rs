//! HTTP middleware and extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. `TraceLayer` (request span)
//! 2. Request ID (recorded into the span, echoed in the response)
//! 3. Route guards, applied per handler through [`RequireSession`]

pub mod auth;
pub mod request_id;

pub use auth::{Access, AuthRejection, RequireAdmin, RequireMember, RequireSession, check_access};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
