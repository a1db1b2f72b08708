//! Session contexts.
//!
//! The console runs two independent session contexts. Each holds at most one
//! principal, persists it under its own storage key, and guards its own
//! routes:
//!
//! | Context           | Principal | Key     | Login path     |
//! |-------------------|-----------|---------|----------------|
//! | [`MemberContext`] | `Member`  | `user`  | `/login`       |
//! | [`AdminContext`]  | `Admin`   | `admin` | `/admin/login` |
//!
//! The context is a type parameter of [`SessionStore`], so a member store can
//! never hold an admin principal.

mod error;
pub mod storage;
mod store;

use std::fmt::Debug;

use loyalty_pro_core::{Admin, Identity, Member, Role};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::SessionError;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::{SessionStore, SimulatedLatency};

use crate::services::auth::CredentialTable;

/// Compile-time description of one session context.
pub trait SessionKind: Sized + Send + Sync + 'static {
    /// The principal type this context holds.
    type Principal: Identity
        + Clone
        + Debug
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Short name used in log fields.
    const NAME: &'static str;
    /// Roles a principal of this context may carry.
    const ROLES: &'static [Role];
    /// Path prefix of the context's routes (empty for the member console).
    const PREFIX: &'static str;
    /// Storage key of the persisted principal.
    const STORAGE_KEY: &'static str;
    /// Where the guard sends anonymous visitors.
    const LOGIN_PATH: &'static str;
    /// Landing page after sign-in.
    const HOME_PATH: &'static str;
    /// Where a request for the context root is sent.
    const ROOT_REDIRECT: &'static str;
}

/// The regular console (branch workers, merchant owners, employees).
#[derive(Debug)]
pub enum MemberContext {}

impl SessionKind for MemberContext {
    type Principal = Member;

    const NAME: &'static str = "member";
    const ROLES: &'static [Role] = &[Role::BranchWorker, Role::MerchantOwner, Role::Employee];
    const PREFIX: &'static str = "";
    const STORAGE_KEY: &'static str = "user";
    const LOGIN_PATH: &'static str = "/login";
    const HOME_PATH: &'static str = "/dashboard";
    const ROOT_REDIRECT: &'static str = "/dashboard";
}

/// The admin panel.
#[derive(Debug)]
pub enum AdminContext {}

impl SessionKind for AdminContext {
    type Principal = Admin;

    const NAME: &'static str = "admin";
    const ROLES: &'static [Role] = &[Role::Admin];
    const PREFIX: &'static str = "/admin";
    const STORAGE_KEY: &'static str = "admin";
    const LOGIN_PATH: &'static str = "/admin/login";
    const HOME_PATH: &'static str = "/admin/dashboard";
    const ROOT_REDIRECT: &'static str = "/admin/login";
}

/// A context's session backed by a fixed credential table.
pub type TableSession<K> = SessionStore<K, CredentialTable<<K as SessionKind>::Principal>>;

/// Member session backed by the built-in credential table.
pub type MemberSession = TableSession<MemberContext>;

/// Admin session backed by the built-in credential table.
pub type AdminSession = TableSession<AdminContext>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contexts_do_not_share_keys_or_paths() {
        assert_ne!(MemberContext::STORAGE_KEY, AdminContext::STORAGE_KEY);
        assert_ne!(MemberContext::LOGIN_PATH, AdminContext::LOGIN_PATH);
        assert!(AdminContext::HOME_PATH.starts_with(AdminContext::PREFIX));
        assert!(AdminContext::LOGIN_PATH.starts_with(AdminContext::PREFIX));
    }

    #[test]
    fn test_root_redirects() {
        assert_eq!(MemberContext::ROOT_REDIRECT, MemberContext::HOME_PATH);
        assert_eq!(AdminContext::ROOT_REDIRECT, AdminContext::LOGIN_PATH);
    }

    #[test]
    fn test_roles_partition() {
        for role in Role::ALL {
            let in_member = MemberContext::ROLES.contains(&role);
            let in_admin = AdminContext::ROLES.contains(&role);
            assert!(in_member != in_admin, "{role} must belong to exactly one context");
            assert_eq!(in_admin, role.is_admin());
        }
    }
}
