//! Sign-in state commands.
//!
//! # Usage
//!
//! ```bash
//! # Sign in to the member console (password from LP_PASSWORD)
//! lp-cli login -e john.doe@branch.com
//!
//! # Sign in to the admin panel
//! lp-cli --admin login -e admin@loyaltypro.com -p admin123
//!
//! # Show who is signed in, and their sidebar
//! lp-cli whoami
//! lp-cli nav
//!
//! # Sign out
//! lp-cli logout
//! ```

use std::fmt::Write as _;

use loyalty_pro_core::{Identity, NavItem, Role, navigation};
use loyalty_pro_web::state::HostedContext;
use secrecy::SecretString;
use serde::Serialize;

use super::{CliError, Workspace};

/// Sign in and persist the principal.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` if no account matches, or
/// `CliError::Session` if the principal cannot be persisted.
pub async fn login<K: HostedContext>(
    workspace: &Workspace,
    email: &str,
    password: &SecretString,
) -> Result<K::Principal, CliError> {
    let mut session = workspace.open::<K>()?;
    if !session.login(email, password).await? {
        return Err(CliError::InvalidCredentials);
    }
    session.principal().cloned().ok_or(CliError::NotSignedIn)
}

/// Sign out. Succeeds when nobody is signed in.
///
/// # Errors
///
/// Returns `CliError::Session` if the persisted entry cannot be removed.
pub fn logout<K: HostedContext>(workspace: &Workspace) -> Result<(), CliError> {
    workspace.open::<K>()?.logout()?;
    Ok(())
}

/// The signed-in principal.
///
/// # Errors
///
/// Returns `CliError::NotSignedIn` if the session is anonymous.
pub fn whoami<K: HostedContext>(workspace: &Workspace) -> Result<K::Principal, CliError> {
    workspace
        .open::<K>()?
        .principal()
        .cloned()
        .ok_or(CliError::NotSignedIn)
}

/// The sidebar of `role`, or of the signed-in principal's role.
///
/// # Errors
///
/// Returns `CliError::NotSignedIn` if no role is given and the session is
/// anonymous.
pub fn nav<K: HostedContext>(
    workspace: &Workspace,
    role: Option<Role>,
) -> Result<&'static [NavItem], CliError> {
    let role = match role {
        Some(role) => role,
        None => whoami::<K>(workspace)?.role(),
    };
    Ok(navigation(role))
}

/// Pretty JSON for terminal output.
///
/// # Errors
///
/// Returns `CliError::Output` if the value cannot be serialized.
pub fn render_json(value: &impl Serialize) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One sidebar entry per line: label, path.
#[must_use]
pub fn render_navigation(items: &[NavItem]) -> String {
    let width = items.iter().map(|item| item.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{:<width$}  {}", item.label, item.path);
    }
    out
}
