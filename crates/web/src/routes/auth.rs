//! Sign-in, sign-out, and password route handlers.
//!
//! Every handler is generic over the session context, so the member console
//! and the admin panel share one implementation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Redirect,
};
use loyalty_pro_core::{Identity, NavItem, navigation};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::error::AppError;
use crate::middleware::RequireSession;
use crate::services::auth::password::validate_new_password;
use crate::state::{AppState, HostedContext};

/// Sign-in form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Successful sign-in.
#[derive(Debug, Serialize)]
pub struct LoginResponse<P> {
    pub principal: P,
    pub navigation: &'static [NavItem],
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// POST /login
pub async fn login<K: HostedContext>(
    State(state): State<AppState>,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> Result<Json<LoginResponse<K::Principal>>, AppError> {
    let Json(form) = payload?;
    let secret = SecretString::from(form.password);

    let mut session = state.session::<K>().lock().await;
    if !session.login(&form.email, &secret).await? {
        return Err(AppError::InvalidCredentials);
    }

    let principal = session
        .principal()
        .cloned()
        .ok_or_else(|| AppError::Internal("session empty after sign-in".to_string()))?;

    Ok(Json(LoginResponse {
        navigation: navigation(principal.role()),
        principal,
    }))
}

/// POST /logout
pub async fn logout<K: HostedContext>(
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.session::<K>().lock().await.logout()?;
    Ok(Redirect::to(K::LOGIN_PATH))
}

/// POST /forgot-password
pub async fn forgot_password<K: HostedContext>(
    State(state): State<AppState>,
    payload: Result<Json<ForgotPasswordForm>, JsonRejection>,
) -> Result<Json<Outcome>, AppError> {
    let Json(form) = payload?;
    let success = state
        .session::<K>()
        .lock()
        .await
        .forgot_password(&form.email)
        .await;
    Ok(Json(Outcome { success }))
}

/// POST /reset-password
pub async fn reset_password<K: HostedContext>(
    State(state): State<AppState>,
    payload: Result<Json<ResetPasswordForm>, JsonRejection>,
) -> Result<Json<Outcome>, AppError> {
    let Json(form) = payload?;
    let secret = SecretString::from(form.password);
    let success = state
        .session::<K>()
        .lock()
        .await
        .reset_password(&form.token, &secret)
        .await;
    Ok(Json(Outcome { success }))
}

/// POST /change-password
pub async fn change_password<K: HostedContext>(
    RequireSession(principal, _): RequireSession<K>,
    State(state): State<AppState>,
    payload: Result<Json<ChangePasswordForm>, JsonRejection>,
) -> Result<Json<Outcome>, AppError> {
    let Json(form) = payload?;
    let current = SecretString::from(form.current_password);
    let new = SecretString::from(form.new_password);
    let confirm = SecretString::from(form.confirm_password);

    validate_new_password(&new, &confirm).map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(principal_id = %principal.profile().id, "password change requested");
    let success = state
        .session::<K>()
        .lock()
        .await
        .change_password(&current, &new)
        .await;
    Ok(Json(Outcome { success }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_form_is_camel_case() {
        let form: ChangePasswordForm = serde_json::from_str(
            r#"{"currentPassword":"a","newPassword":"b","confirmPassword":"c"}"#,
        )
        .unwrap();
        assert_eq!(form.current_password, "a");
        assert_eq!(form.new_password, "b");
        assert_eq!(form.confirm_password, "c");
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            principal: crate::services::auth::accounts::admin().unwrap(),
            navigation: navigation(loyalty_pro_core::Role::Admin),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["principal"]["role"], "admin");
        assert_eq!(json["navigation"][0]["path"], "/admin/dashboard");
    }
}
