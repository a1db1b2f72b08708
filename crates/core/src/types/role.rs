//! Principal roles.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0} (expected branch_worker, merchant_owner, employee, or admin)")]
pub struct RoleParseError(pub String);

/// The role a principal signs in with.
///
/// The first three roles belong to the regular console; `Admin` belongs to
/// the admin panel only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Staff member operating a single branch.
    BranchWorker,
    /// Business owner managing branches, workers, and points settings.
    MerchantOwner,
    /// Head-office employee with analytics and reporting access.
    Employee,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// All roles, regular console first.
    pub const ALL: [Self; 4] = [
        Self::BranchWorker,
        Self::MerchantOwner,
        Self::Employee,
        Self::Admin,
    ];

    /// Wire name of the role, as used in persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BranchWorker => "branch_worker",
            Self::MerchantOwner => "merchant_owner",
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }

    /// Human-readable role label shown under the principal's name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BranchWorker => "Branch Worker",
            Self::MerchantOwner => "Merchant Owner",
            Self::Employee => "Employee",
            Self::Admin => "System Administrator",
        }
    }

    /// Name of the panel the role signs into.
    #[must_use]
    pub const fn panel_name(self) -> &'static str {
        match self {
            Self::BranchWorker => "Branch Panel",
            Self::MerchantOwner => "Merchant Panel",
            Self::Employee => "Employee Panel",
            Self::Admin => "Admin Panel",
        }
    }

    /// Whether the role belongs to the admin panel rather than the regular console.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branch_worker" => Ok(Self::BranchWorker),
            "merchant_owner" => Ok(Self::MerchantOwner),
            "employee" => Ok(Self::Employee),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}
