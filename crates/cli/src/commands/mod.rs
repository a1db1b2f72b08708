//! Command implementations.
//!
//! Every command hydrates the session of one context from the state
//! directory, acts on it, and leaves the persisted entry for the next run.

pub mod account;
pub mod session;

use std::sync::Arc;

use loyalty_pro_core::EmailError;
use loyalty_pro_web::config::{ConfigError, get_optional_env};
use loyalty_pro_web::services::auth::password::PasswordRuleError;
use loyalty_pro_web::session::{
    SessionError, SessionStorage, SessionStore, SimulatedLatency, TableSession,
};
use loyalty_pro_web::state::HostedContext;
use secrecy::SecretString;
use thiserror::Error;

/// Environment variable read when `--password` is omitted.
pub const PASSWORD_ENV: &str = "LP_PASSWORD";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    PasswordRule(#[from] PasswordRuleError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No password given (use --password or set LP_PASSWORD)")]
    MissingPassword,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Sign-up is only available in the member console")]
    SignUpUnavailable,

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Where sessions live and how slow the simulated calls are.
#[derive(Clone)]
pub struct Workspace {
    pub storage: Arc<dyn SessionStorage>,
    pub latency: SimulatedLatency,
}

impl Workspace {
    /// Hydrate context `K`'s session.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if a built-in account is malformed or the persisted
    /// session cannot be read.
    pub fn open<K: HostedContext>(&self) -> Result<TableSession<K>, CliError> {
        Ok(SessionStore::hydrate(
            K::credentials()?,
            Arc::clone(&self.storage),
            self.latency,
        )?)
    }
}

/// Take the password from the flag, falling back to `LP_PASSWORD`.
///
/// # Errors
///
/// Returns `CliError::MissingPassword` if neither is set.
pub fn resolve_password(flag: Option<String>) -> Result<SecretString, CliError> {
    flag.or_else(|| get_optional_env(PASSWORD_ENV))
        .map(SecretString::from)
        .ok_or(CliError::MissingPassword)
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let secret = resolve_password(Some("from-flag".to_string())).unwrap();
        assert_eq!(secret.expose_secret(), "from-flag");
    }

    #[test]
    fn test_missing_password_message() {
        assert_eq!(
            CliError::MissingPassword.to_string(),
            "No password given (use --password or set LP_PASSWORD)"
        );
    }
}
