//! Route guards.
//!
//! Access is binary: any signed-in principal of a context reaches every
//! guarded route of that context, whatever its role. Anonymous visitors are
//! sent to the context's login page.

use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::services::auth::AuthProvider;
use crate::session::{AdminContext, MemberContext, SessionKind, SessionStore};
use crate::state::{AppState, HostedContext};

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a, T> {
    /// The session is authenticated; here is its principal.
    Granted(&'a T),
    /// Nobody is signed in; go to this login path.
    Redirect(&'static str),
}

/// Decide whether `store` may see its context's protected content.
#[must_use]
pub fn check_access<K, P>(store: &SessionStore<K, P>) -> Access<'_, K::Principal>
where
    K: SessionKind,
    P: AuthProvider<K::Principal>,
{
    store
        .principal()
        .map_or(Access::Redirect(K::LOGIN_PATH), Access::Granted)
}

/// Extractor that requires a signed-in principal in context `K`.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireSession(member, _): RequireMember,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", member.full_name())
/// }
/// ```
pub struct RequireSession<K: SessionKind>(pub K::Principal, pub PhantomData<K>);

/// Guard for the member console.
pub type RequireMember = RequireSession<MemberContext>;

/// Guard for the admin panel.
pub type RequireAdmin = RequireSession<AdminContext>;

impl<K: SessionKind> RequireSession<K> {
    /// The guarded principal.
    #[must_use]
    pub fn into_inner(self) -> K::Principal {
        self.0
    }
}

/// Returned when a guarded route is requested without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection {
    login_path: &'static str,
}

impl AuthRejection {
    /// Where the visitor is sent.
    #[must_use]
    pub const fn login_path(&self) -> &'static str {
        self.login_path
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        Redirect::to(self.login_path).into_response()
    }
}

impl<K> FromRequestParts<AppState> for RequireSession<K>
where
    K: HostedContext,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let store = state.session::<K>().lock().await;

        match check_access(&*store) {
            Access::Granted(principal) => Ok(Self(principal.clone(), PhantomData)),
            Access::Redirect(login_path) => {
                tracing::debug!(
                    context = K::NAME,
                    path = parts.uri.path(),
                    "anonymous request redirected to login"
                );
                Err(AuthRejection { login_path })
            }
        }
    }
}
