//! Account commands: password recovery, password change, merchant sign-up.
//!
//! These run the same simulated calls as the console, including their delay
//! (`LP_ACCOUNT_DELAY_MS`, `LP_SIGNUP_DELAY_MS`).

use clap::Args;
use loyalty_pro_core::{BusinessProfile, Email, Registration};
use loyalty_pro_web::services::auth::password::validate_new_password;
use loyalty_pro_web::session::MemberContext;
use loyalty_pro_web::state::HostedContext;
use secrecy::SecretString;

use super::{CliError, Workspace};

/// Fields of the merchant sign-up form.
#[derive(Debug, Clone, Args)]
pub struct SignUpArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub business_name: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub contact_info: String,

    /// Logo URL
    #[arg(long)]
    pub business_image: Option<String>,

    /// Legal document (repeatable)
    #[arg(long = "legal-doc")]
    pub legal_docs: Vec<String>,
}

impl SignUpArgs {
    /// Build the registration payload.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidEmail` if the address is malformed.
    pub fn into_registration(self) -> Result<Registration, CliError> {
        Ok(Registration {
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::parse(&self.email)?,
            phone_number: self.phone,
            business: BusinessProfile {
                business_name: self.business_name,
                address: self.address,
                contact_info: self.contact_info,
                legal_docs: self.legal_docs,
                business_image: self.business_image,
            },
        })
    }
}

/// Request a password-reset email.
///
/// # Errors
///
/// Returns `CliError` if the session cannot be hydrated.
pub async fn forgot_password<K: HostedContext>(
    workspace: &Workspace,
    email: &str,
) -> Result<bool, CliError> {
    Ok(workspace.open::<K>()?.forgot_password(email).await)
}

/// Set a new password from a reset token.
///
/// # Errors
///
/// Returns `CliError` if the session cannot be hydrated.
pub async fn reset_password<K: HostedContext>(
    workspace: &Workspace,
    token: &str,
    password: &SecretString,
) -> Result<bool, CliError> {
    Ok(workspace.open::<K>()?.reset_password(token, password).await)
}

/// Change the signed-in principal's password.
///
/// # Errors
///
/// Returns `CliError::NotSignedIn` for an anonymous session and
/// `CliError::PasswordRule` if the new password breaks the form rules.
pub async fn change_password<K: HostedContext>(
    workspace: &Workspace,
    current: &SecretString,
    new: &SecretString,
    confirm: &SecretString,
) -> Result<bool, CliError> {
    let session = workspace.open::<K>()?;
    if !session.is_authenticated() {
        return Err(CliError::NotSignedIn);
    }
    validate_new_password(new, confirm)?;
    Ok(session.change_password(current, new).await)
}

/// Submit a merchant registration.
///
/// # Errors
///
/// Returns `CliError` if the email is malformed or the session cannot be
/// hydrated.
pub async fn sign_up(workspace: &Workspace, args: SignUpArgs) -> Result<bool, CliError> {
    let registration = args.into_registration()?;
    let session = workspace.open::<MemberContext>()?;
    Ok(session.sign_up(&registration).await)
}
