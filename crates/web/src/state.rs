//! Application state shared across handlers.

use std::sync::Arc;

use loyalty_pro_core::EmailError;
use tokio::sync::Mutex;

use crate::config::WebConfig;
use crate::error::AppError;
use crate::services::auth::{CredentialTable, accounts};
use crate::session::{
    AdminContext, AdminSession, MemberContext, MemberSession, SessionKind, SessionStorage,
    SessionStore, SimulatedLatency, TableSession,
};

/// Application state shared across all handlers.
///
/// Each context's session sits behind its own lock; a handler holds the lock
/// for the whole operation, so operations on one session never interleave.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    member: Mutex<MemberSession>,
    admin: Mutex<AdminSession>,
}

impl AppState {
    /// Hydrate both sessions from `storage` using the built-in accounts.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if a built-in account is malformed or the
    /// persisted sessions cannot be read.
    pub fn new(config: WebConfig, storage: Arc<dyn SessionStorage>) -> Result<Self, AppError> {
        let member = open_session::<MemberContext>(Arc::clone(&storage), config.latency)?;
        let admin = open_session::<AdminContext>(storage, config.latency)?;
        Ok(Self::from_sessions(config, member, admin))
    }

    /// Wrap already-built sessions.
    #[must_use]
    pub fn from_sessions(config: WebConfig, member: MemberSession, admin: AdminSession) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                member: Mutex::new(member),
                admin: Mutex::new(admin),
            }),
        }
    }

    /// Service configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// The member console session.
    #[must_use]
    pub fn member(&self) -> &Mutex<MemberSession> {
        &self.inner.member
    }

    /// The admin panel session.
    #[must_use]
    pub fn admin(&self) -> &Mutex<AdminSession> {
        &self.inner.admin
    }

    /// The session of context `K`.
    #[must_use]
    pub fn session<K: HostedContext>(&self) -> &Mutex<TableSession<K>> {
        K::session(self)
    }
}

/// A session context hosted by [`AppState`].
pub trait HostedContext: SessionKind {
    /// The built-in accounts of this context.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if a built-in address fails validation.
    fn credentials() -> Result<CredentialTable<Self::Principal>, EmailError>;

    /// Pick this context's session out of the state.
    fn session(state: &AppState) -> &Mutex<TableSession<Self>>;
}

impl HostedContext for MemberContext {
    fn credentials() -> Result<CredentialTable<Self::Principal>, EmailError> {
        accounts::member_table()
    }

    fn session(state: &AppState) -> &Mutex<TableSession<Self>> {
        state.member()
    }
}

impl HostedContext for AdminContext {
    fn credentials() -> Result<CredentialTable<Self::Principal>, EmailError> {
        accounts::admin_table()
    }

    fn session(state: &AppState) -> &Mutex<TableSession<Self>> {
        state.admin()
    }
}

/// Hydrate context `K`'s session over its built-in accounts.
///
/// # Errors
///
/// Returns `AppError` if a built-in account is malformed or the persisted
/// session cannot be read.
pub fn open_session<K: HostedContext>(
    storage: Arc<dyn SessionStorage>,
    latency: SimulatedLatency,
) -> Result<TableSession<K>, AppError> {
    Ok(SessionStore::hydrate(K::credentials()?, storage, latency)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::session::MemoryStorage;

    #[tokio::test]
    async fn test_contexts_map_to_distinct_sessions() {
        let state = AppState::new(WebConfig::default(), Arc::new(MemoryStorage::new())).unwrap();

        let ok = state
            .session::<AdminContext>()
            .lock()
            .await
            .login(
                "admin@loyaltypro.com",
                &SecretString::from(accounts::ADMIN_DEMO_PASSWORD),
            )
            .await
            .unwrap();
        assert!(ok);

        assert!(state.admin().lock().await.is_authenticated());
        assert!(!state.session::<MemberContext>().lock().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_clones_share_sessions() {
        let state = AppState::new(WebConfig::default(), Arc::new(MemoryStorage::new())).unwrap();
        let clone = state.clone();

        clone
            .member()
            .lock()
            .await
            .login(
                "john.doe@branch.com",
                &SecretString::from(accounts::MEMBER_DEMO_PASSWORD),
            )
            .await
            .unwrap();

        assert!(state.member().lock().await.is_authenticated());
        assert_eq!(state.config().port, 3000);
    }
}
