//! The per-context session store.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use loyalty_pro_core::{Identity, Member, Registration};
use secrecy::SecretString;

use super::error::SessionError;
use super::storage::SessionStorage;
use super::{MemberContext, SessionKind};
use crate::services::auth::AuthProvider;

/// Fixed delays applied to the simulated account operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    /// Forgot, reset, and change password.
    pub account: Duration,
    /// Merchant sign-up.
    pub sign_up: Duration,
}

impl SimulatedLatency {
    /// No delay at all.
    pub const NONE: Self = Self {
        account: Duration::ZERO,
        sign_up: Duration::ZERO,
    };
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            account: Duration::from_secs(1),
            sign_up: Duration::from_secs(2),
        }
    }
}

/// Holds at most one principal for a session context.
///
/// The store is either anonymous or authenticated; `is_authenticated` is
/// derived from the held principal, so the two can never disagree. Only
/// [`login`](Self::login) and [`logout`](Self::logout) change state, and both
/// write through to storage under `K::STORAGE_KEY`.
pub struct SessionStore<K: SessionKind, P> {
    principal: Option<K::Principal>,
    provider: P,
    storage: Arc<dyn SessionStorage>,
    latency: SimulatedLatency,
    kind: PhantomData<K>,
}

impl<K, P> SessionStore<K, P>
where
    K: SessionKind,
    P: AuthProvider<K::Principal>,
{
    /// Build the store and restore any principal persisted by a previous run.
    ///
    /// An entry that cannot be deserialized is logged, deleted, and ignored;
    /// the store then starts anonymous.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the backend cannot be read, or if an
    /// unreadable entry cannot be deleted.
    pub fn hydrate(
        provider: P,
        storage: Arc<dyn SessionStorage>,
        latency: SimulatedLatency,
    ) -> Result<Self, SessionError> {
        let principal = match storage.load(K::STORAGE_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str::<K::Principal>(&raw) {
                Ok(principal) => {
                    tracing::info!(
                        context = K::NAME,
                        principal_id = %principal.profile().id,
                        role = %principal.role(),
                        "session restored"
                    );
                    Some(principal)
                }
                Err(e) => {
                    tracing::warn!(
                        context = K::NAME,
                        error = %e,
                        "discarding unreadable session entry"
                    );
                    storage.remove(K::STORAGE_KEY)?;
                    None
                }
            },
        };

        Ok(Self {
            principal,
            provider,
            storage,
            latency,
            kind: PhantomData,
        })
    }

    /// The signed-in principal, if any.
    #[must_use]
    pub const fn principal(&self) -> Option<&K::Principal> {
        self.principal.as_ref()
    }

    /// Whether a principal is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// The credential provider backing this store.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Sign in with an identifier and secret.
    ///
    /// Returns `Ok(false)` and leaves the session untouched when the provider
    /// rejects the credentials. On success the principal replaces whoever was
    /// signed in before.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the principal cannot be persisted. The
    /// in-memory session is unchanged in that case.
    pub async fn login(
        &mut self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<bool, SessionError> {
        let Some(principal) = self.provider.verify(identifier, secret).await else {
            tracing::info!(context = K::NAME, identifier, "login rejected");
            return Ok(false);
        };

        let serialized = serde_json::to_string(&principal)?;
        self.storage.save(K::STORAGE_KEY, &serialized)?;

        tracing::info!(
            context = K::NAME,
            principal_id = %principal.profile().id,
            role = %principal.role(),
            "login succeeded"
        );
        self.principal = Some(principal);
        Ok(true)
    }

    /// Sign out. Safe to call when nobody is signed in.
    ///
    /// The in-memory session is always cleared, even when deleting the
    /// persisted entry fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the persisted entry cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(principal) = self.principal.take() {
            tracing::info!(
                context = K::NAME,
                principal_id = %principal.profile().id,
                "logged out"
            );
        }
        self.storage.remove(K::STORAGE_KEY)?;
        Ok(())
    }

    /// Request a password-reset email. Always succeeds after the account delay.
    pub async fn forgot_password(&self, identifier: &str) -> bool {
        tokio::time::sleep(self.latency.account).await;
        tracing::debug!(context = K::NAME, identifier, "password reset requested");
        true
    }

    /// Set a new password from a reset token. The token is not checked.
    pub async fn reset_password(&self, _token: &str, _secret: &SecretString) -> bool {
        tokio::time::sleep(self.latency.account).await;
        tracing::debug!(context = K::NAME, "password reset");
        true
    }

    /// Change the password. The current password is not checked.
    pub async fn change_password(&self, _current: &SecretString, _new: &SecretString) -> bool {
        tokio::time::sleep(self.latency.account).await;
        tracing::debug!(context = K::NAME, "password changed");
        true
    }
}

impl<P> SessionStore<MemberContext, P>
where
    P: AuthProvider<Member>,
{
    /// Submit a merchant registration. Always succeeds after the sign-up delay.
    ///
    /// Nothing is recorded: the new merchant cannot sign in until an
    /// administrator creates the account.
    pub async fn sign_up(&self, registration: &Registration) -> bool {
        tokio::time::sleep(self.latency.sign_up).await;
        tracing::info!(
            email = %registration.email,
            business = %registration.business.business_name,
            "merchant registration submitted"
        );
        true
    }
}

impl<K: SessionKind, P> std::fmt::Debug for SessionStore<K, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("context", &K::NAME)
            .field("principal", &self.principal)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
