//! Credential verification.
//!
//! The session store never checks credentials itself. It asks an
//! [`AuthProvider`] to turn an (identifier, secret) pair into a principal,
//! so a real identity backend can replace the fixed [`CredentialTable`]
//! without touching session control flow.

pub mod accounts;
pub mod password;

use std::collections::HashMap;
use std::fmt;
use std::future::{self, Future};

use secrecy::{ExposeSecret, SecretString};

/// Resolves sign-in credentials to a principal.
pub trait AuthProvider<P>: Send + Sync {
    /// Return the principal for `identifier` if `secret` matches, `None` otherwise.
    fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> impl Future<Output = Option<P>> + Send;
}

struct Entry<P> {
    secret: SecretString,
    principal: P,
}

/// A fixed in-memory table of (identifier, secret) -> principal.
///
/// Identifiers and secrets are compared verbatim. There is no hashing, no
/// rate limiting, and no lockout.
pub struct CredentialTable<P> {
    entries: HashMap<String, Entry<P>>,
}

impl<P> CredentialTable<P> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add an account, replacing any previous entry for the same identifier.
    #[must_use]
    pub fn with_account(
        mut self,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        principal: P,
    ) -> Self {
        self.entries.insert(
            identifier.into(),
            Entry {
                secret: SecretString::from(secret.into()),
                principal,
            },
        );
        self
    }

    /// Number of accounts in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the principal for an identifier without checking a secret.
    #[must_use]
    pub fn principal(&self, identifier: &str) -> Option<&P> {
        self.entries.get(identifier).map(|entry| &entry.principal)
    }
}

impl<P> Default for CredentialTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for CredentialTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        f.debug_struct("CredentialTable")
            .field("identifiers", &identifiers)
            .field("secrets", &"[REDACTED]")
            .finish()
    }
}

impl<P> AuthProvider<P> for CredentialTable<P>
where
    P: Clone + Send + Sync,
{
    fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> impl Future<Output = Option<P>> + Send {
        let found = self
            .entries
            .get(identifier)
            .filter(|entry| entry.secret.expose_secret() == secret.expose_secret())
            .map(|entry| entry.principal.clone());

        // The table answers immediately; no simulated latency on sign-in.
        future::ready(found)
    }
}
