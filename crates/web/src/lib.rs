//! LoyaltyPro console service library.
//!
//! Hosts the two session contexts of the console (member and admin), their
//! route guards, and the HTTP surface in front of them. The binary in
//! `main.rs` and the operator CLI both build on this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
