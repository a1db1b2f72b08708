//! LoyaltyPro Core - Shared types library.
//!
//! This crate provides the types shared by every LoyaltyPro component:
//! - `web` - HTTP service hosting the member and admin session contexts
//! - `cli` - Operator tool driving the same session stores
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP. Anything that touches the filesystem or the network lives in `web`.
//!
//! # Modules
//!
//! - [`types`] - Principal records, roles, identifiers, and email addresses
//! - [`navigation`] - Fixed role-to-navigation tables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod navigation;
pub mod types;

pub use navigation::{DashboardView, Icon, NavItem, navigation};
pub use types::*;
