//! Role-to-navigation tables.
//!
//! Each role sees a fixed, ordered sidebar. The tables are cosmetic: every
//! authenticated principal may reach every guarded route of its context, the
//! sidebar only decides which links are offered.

use serde::Serialize;

use crate::types::Role;

/// Sidebar icon tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    Users,
    Plus,
    Minus,
    FileText,
    User,
    Building,
    Settings,
    UserCheck,
    BarChart3,
    TrendingUp,
    Store,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

const fn item(label: &'static str, path: &'static str, icon: Icon) -> NavItem {
    NavItem { label, path, icon }
}

const BRANCH_WORKER: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::LayoutDashboard),
    item("Customers", "/customers", Icon::Users),
    item("Topup Points", "/topup", Icon::Plus),
    item("Redeem Points", "/redeem", Icon::Minus),
    item("Transaction Logs", "/transactions", Icon::FileText),
    item("My Account", "/account", Icon::User),
];

const MERCHANT_OWNER: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::LayoutDashboard),
    item("Workers Management", "/workers", Icon::UserCheck),
    item("Branches Management", "/branches", Icon::Building),
    item("Customers", "/customers", Icon::Users),
    item("Topup Points", "/topup", Icon::Plus),
    item("Redeem Points", "/redeem", Icon::Minus),
    item("Transaction Logs", "/transactions", Icon::FileText),
    item("Points Configuration", "/points-config", Icon::Settings),
    item("My Account", "/account", Icon::User),
];

const EMPLOYEE: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::LayoutDashboard),
    item("Advanced Analytics", "/analytics", Icon::BarChart3),
    item("Reports Management", "/reports", Icon::FileText),
    item("Customers", "/customers", Icon::Users),
    item("Branches Overview", "/branches", Icon::Building),
    item("Topup Points", "/topup", Icon::Plus),
    item("Redeem Points", "/redeem", Icon::Minus),
    item("Transaction Logs", "/transactions", Icon::TrendingUp),
    item("My Account", "/account", Icon::User),
];

const ADMIN: &[NavItem] = &[
    item("Dashboard", "/admin/dashboard", Icon::LayoutDashboard),
    item("Users Management", "/admin/users", Icon::Users),
    item("Merchants Management", "/admin/merchants", Icon::UserCheck),
    item("Outlets Management", "/admin/outlets", Icon::Store),
    item("Transactions", "/admin/transactions", Icon::TrendingUp),
    item("My Account", "/admin/account", Icon::User),
];

/// Returns the ordered sidebar for a role.
///
/// ```
/// use loyalty_pro_core::{Role, navigation};
///
/// let labels: Vec<_> = navigation(Role::BranchWorker).iter().map(|i| i.label).collect();
/// assert_eq!(labels.first(), Some(&"Dashboard"));
/// assert_eq!(labels.last(), Some(&"My Account"));
/// ```
#[must_use]
pub const fn navigation(role: Role) -> &'static [NavItem] {
    match role {
        Role::BranchWorker => BRANCH_WORKER,
        Role::MerchantOwner => MERCHANT_OWNER,
        Role::Employee => EMPLOYEE,
        Role::Admin => ADMIN,
    }
}

/// Which dashboard variant `/dashboard` renders for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Branch,
    Merchant,
    Employee,
    Admin,
}

impl DashboardView {
    /// Pick the dashboard for a role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::BranchWorker => Self::Branch,
            Role::MerchantOwner => Self::Merchant,
            Role::Employee => Self::Employee,
            Role::Admin => Self::Admin,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn paths(role: Role) -> Vec<&'static str> {
        navigation(role).iter().map(|item| item.path).collect()
    }

    #[test]
    fn test_branch_worker_table() {
        assert_eq!(
            paths(Role::BranchWorker),
            [
                "/dashboard",
                "/customers",
                "/topup",
                "/redeem",
                "/transactions",
                "/account"
            ]
        );
    }

    #[test]
    fn test_merchant_owner_table() {
        let table = navigation(Role::MerchantOwner);
        assert_eq!(table.len(), 9);
        assert_eq!(
            table.get(7),
            Some(&item(
                "Points Configuration",
                "/points-config",
                Icon::Settings
            ))
        );
    }

    #[test]
    fn test_employee_table() {
        let table = navigation(Role::Employee);
        assert_eq!(table.len(), 9);
        assert!(table.iter().any(|i| i.path == "/analytics"));
        assert!(table.iter().all(|i| i.path != "/workers"));
        assert_eq!(
            table.iter().find(|i| i.path == "/transactions").map(|i| i.icon),
            Some(Icon::TrendingUp)
        );
    }

    #[test]
    fn test_admin_table_stays_under_admin_prefix() {
        assert!(paths(Role::Admin).iter().all(|p| p.starts_with("/admin/")));
        for role in [Role::BranchWorker, Role::MerchantOwner, Role::Employee] {
            assert!(paths(role).iter().all(|p| !p.starts_with("/admin")));
        }
    }

    #[test]
    fn test_every_table_starts_at_dashboard() {
        for role in Role::ALL {
            let first = navigation(role).first().unwrap();
            assert_eq!(first.label, "Dashboard");
            assert_eq!(first.icon, Icon::LayoutDashboard);
        }
    }

    #[test]
    fn test_icon_serialization() {
        let json = serde_json::to_value(item("Analytics", "/analytics", Icon::BarChart3)).unwrap();
        assert_eq!(json["icon"], "bar-chart3");
        assert_eq!(json["label"], "Analytics");
    }

    #[test]
    fn test_dashboard_view() {
        assert_eq!(
            DashboardView::for_role(Role::MerchantOwner),
            DashboardView::Merchant
        );
        assert_eq!(
            DashboardView::for_role(Role::BranchWorker),
            DashboardView::Branch
        );
    }
}
