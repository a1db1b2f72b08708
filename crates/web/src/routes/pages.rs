//! Guarded page shells.
//!
//! A page shell is what the console renders around the page body: panel
//! name, signed-in user, and sidebar. The guarded paths of a context are the
//! paths its roles' sidebars link to.

use axum::{
    Json,
    http::Uri,
    response::Redirect,
};
use loyalty_pro_core::{DashboardView, Identity, NavItem, Role};
use serde::Serialize;

use crate::middleware::RequireSession;
use crate::session::SessionKind;
use crate::state::HostedContext;

/// The frame of a guarded page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageShell {
    pub path: String,
    /// Sidebar label of the page, when the role's sidebar links to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub panel: &'static str,
    pub user: String,
    pub role: Role,
    pub role_name: &'static str,
    pub navigation: &'static [NavItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardView>,
}

impl PageShell {
    /// Frame `path` for a principal.
    #[must_use]
    pub fn for_principal(principal: &impl Identity, path: &str, home_path: &str) -> Self {
        let role = principal.role();
        let navigation = loyalty_pro_core::navigation(role);

        Self {
            path: path.to_owned(),
            title: navigation
                .iter()
                .find(|item| item.path == path)
                .map(|item| item.label),
            panel: role.panel_name(),
            user: principal.full_name(),
            role,
            role_name: role.display_name(),
            navigation,
            dashboard: (path == home_path).then(|| DashboardView::for_role(role)),
        }
    }
}

/// Every path linked from the sidebar of any role of context `K`, in
/// first-seen order.
#[must_use]
pub fn guarded_paths<K: SessionKind>() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    for &role in K::ROLES {
        for item in loyalty_pro_core::navigation(role) {
            if !paths.contains(&item.path) {
                paths.push(item.path);
            }
        }
    }
    paths
}

/// GET / and GET /admin
pub async fn root<K: HostedContext>() -> Redirect {
    Redirect::to(K::ROOT_REDIRECT)
}

/// GET a guarded page.
pub async fn page<K: HostedContext>(
    RequireSession(principal, _): RequireSession<K>,
    uri: Uri,
) -> Json<PageShell> {
    Json(PageShell::for_principal(
        &principal,
        uri.path(),
        K::HOME_PATH,
    ))
}

/// GET /me
pub async fn me<K: HostedContext>(
    RequireSession(principal, _): RequireSession<K>,
) -> Json<K::Principal> {
    Json(principal)
}

/// GET /navigation
pub async fn navigation<K: HostedContext>(
    RequireSession(principal, _): RequireSession<K>,
) -> Json<&'static [NavItem]> {
    Json(loyalty_pro_core::navigation(principal.role()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::auth::accounts;
    use crate::session::{AdminContext, MemberContext};

    #[test]
    fn test_member_guarded_paths() {
        let paths = guarded_paths::<MemberContext>();
        for expected in [
            "/dashboard",
            "/customers",
            "/topup",
            "/redeem",
            "/transactions",
            "/account",
            "/workers",
            "/branches",
            "/points-config",
            "/analytics",
            "/reports",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        assert_eq!(paths.len(), 11);
        assert_eq!(paths.first(), Some(&"/dashboard"));
    }

    #[test]
    fn test_admin_guarded_paths() {
        assert_eq!(
            guarded_paths::<AdminContext>(),
            [
                "/admin/dashboard",
                "/admin/users",
                "/admin/merchants",
                "/admin/outlets",
                "/admin/transactions",
                "/admin/account",
            ]
        );
    }

    #[test]
    fn test_dashboard_shell() {
        let owner = accounts::merchant_owner().unwrap();
        let shell = PageShell::for_principal(&owner, "/dashboard", "/dashboard");

        assert_eq!(shell.title, Some("Dashboard"));
        assert_eq!(shell.panel, "Merchant Panel");
        assert_eq!(shell.user, "Sarah Johnson");
        assert_eq!(shell.dashboard, Some(DashboardView::Merchant));
    }

    #[test]
    fn test_page_outside_sidebar_has_no_title() {
        let worker = accounts::branch_worker().unwrap();
        let shell = PageShell::for_principal(&worker, "/analytics", "/dashboard");

        assert_eq!(shell.title, None);
        assert_eq!(shell.dashboard, None);
        assert_eq!(shell.role_name, "Branch Worker");

        let json = serde_json::to_value(&shell).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["role"], "branch_worker");
    }
}
