//! Services used by the route handlers.

pub mod auth;
