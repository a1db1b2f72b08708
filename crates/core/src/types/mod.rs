//! Core types for LoyaltyPro.
//!
//! This module provides type-safe wrappers for identities and the principal
//! records held by a session.

pub mod email;
pub mod id;
pub mod principal;
pub mod registration;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use principal::{
    AccessLevel, Admin, BranchWorker, BusinessProfile, Employee, Identity, Member, MerchantOwner,
    Principal, Profile, RoleMismatch,
};
pub use registration::Registration;
pub use role::{Role, RoleParseError};
