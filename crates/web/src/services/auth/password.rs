//! Rules of the change-password form.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Shortest password the change-password form accepts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A new password was rejected before reaching the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordRuleError {
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
}

/// Check a new password and its confirmation.
///
/// # Errors
///
/// Returns `PasswordRuleError` if the confirmation differs or the password
/// has fewer than [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_new_password(
    new: &SecretString,
    confirm: &SecretString,
) -> Result<(), PasswordRuleError> {
    if new.expose_secret() != confirm.expose_secret() {
        return Err(PasswordRuleError::Mismatch);
    }
    if new.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordRuleError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
