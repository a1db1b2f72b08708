//! Principal records held by a session.
//!
//! Every principal carries a common [`Profile`] plus role-specific fields.
//! The wire format is the role-tagged [`Principal`] enum with camelCase
//! field names:
//!
//! ```json
//! {"role":"branch_worker","id":"1","firstName":"John", ...,"branchId":"branch-1","assignedBy":"merchant-1"}
//! ```
//!
//! [`Member`] and [`Admin`] are the subsets each session context accepts.
//! They serialize through [`Principal`], so a record persisted by one context
//! never deserializes as the other context's principal.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::{BranchId, PrincipalId};
use super::role::Role;

/// Fields shared by every principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: PrincipalId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone_number: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// A staff member assigned to one branch by a merchant owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchWorker {
    #[serde(flatten)]
    pub profile: Profile,
    pub branch_id: BranchId,
    /// The merchant owner who assigned this worker.
    pub assigned_by: PrincipalId,
}

/// Business details registered by a merchant owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub business_name: String,
    pub address: String,
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal_docs: Vec<String>,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_image: Option<String>,
}

/// A business owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantOwner {
    #[serde(flatten)]
    pub profile: Profile,
    pub business_info: BusinessProfile,
}

/// Seniority tier of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Standard,
    Senior,
    Manager,
}

/// A head-office employee.
///
/// `permissions` is carried for display only. Nothing in the console gates
/// access on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(flatten)]
    pub profile: Profile,
    pub department: String,
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<PrincipalId>,
    pub access_level: AccessLevel,
}

/// Any authenticated identity, tagged by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Principal {
    BranchWorker(BranchWorker),
    MerchantOwner(MerchantOwner),
    Employee(Employee),
    Admin(Profile),
}

/// A principal of the regular console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Principal", try_from = "Principal")]
pub enum Member {
    BranchWorker(BranchWorker),
    MerchantOwner(MerchantOwner),
    Employee(Employee),
}

/// A principal of the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Principal", try_from = "Principal")]
pub struct Admin {
    pub profile: Profile,
}

/// A principal was converted into a context that does not accept its role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{found} principal cannot be used as {expected}")]
pub struct RoleMismatch {
    /// The subset that was requested (`member` or `admin`).
    pub expected: &'static str,
    /// The role actually carried by the principal.
    pub found: Role,
}

/// Read access to the parts every principal shares.
pub trait Identity {
    /// The common profile fields.
    fn profile(&self) -> &Profile;

    /// The principal's role.
    fn role(&self) -> Role;

    /// `"First Last"`, as shown in the sidebar.
    fn full_name(&self) -> String {
        let profile = self.profile();
        format!("{} {}", profile.first_name, profile.last_name)
    }
}

impl Identity for Principal {
    fn profile(&self) -> &Profile {
        match self {
            Self::BranchWorker(worker) => &worker.profile,
            Self::MerchantOwner(owner) => &owner.profile,
            Self::Employee(employee) => &employee.profile,
            Self::Admin(profile) => profile,
        }
    }

    fn role(&self) -> Role {
        match self {
            Self::BranchWorker(_) => Role::BranchWorker,
            Self::MerchantOwner(_) => Role::MerchantOwner,
            Self::Employee(_) => Role::Employee,
            Self::Admin(_) => Role::Admin,
        }
    }
}

impl Identity for Member {
    fn profile(&self) -> &Profile {
        match self {
            Self::BranchWorker(worker) => &worker.profile,
            Self::MerchantOwner(owner) => &owner.profile,
            Self::Employee(employee) => &employee.profile,
        }
    }

    fn role(&self) -> Role {
        match self {
            Self::BranchWorker(_) => Role::BranchWorker,
            Self::MerchantOwner(_) => Role::MerchantOwner,
            Self::Employee(_) => Role::Employee,
        }
    }
}

impl Identity for Admin {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn role(&self) -> Role {
        Role::Admin
    }
}

impl From<Member> for Principal {
    fn from(member: Member) -> Self {
        match member {
            Member::BranchWorker(worker) => Self::BranchWorker(worker),
            Member::MerchantOwner(owner) => Self::MerchantOwner(owner),
            Member::Employee(employee) => Self::Employee(employee),
        }
    }
}

impl From<Admin> for Principal {
    fn from(admin: Admin) -> Self {
        Self::Admin(admin.profile)
    }
}

impl TryFrom<Principal> for Member {
    type Error = RoleMismatch;

    fn try_from(principal: Principal) -> Result<Self, Self::Error> {
        match principal {
            Principal::BranchWorker(worker) => Ok(Self::BranchWorker(worker)),
            Principal::MerchantOwner(owner) => Ok(Self::MerchantOwner(owner)),
            Principal::Employee(employee) => Ok(Self::Employee(employee)),
            Principal::Admin(_) => Err(RoleMismatch {
                expected: "member",
                found: Role::Admin,
            }),
        }
    }
}

impl TryFrom<Principal> for Admin {
    type Error = RoleMismatch;

    fn try_from(principal: Principal) -> Result<Self, Self::Error> {
        match principal {
            Principal::Admin(profile) => Ok(Self { profile }),
            other => Err(RoleMismatch {
                expected: "admin",
                found: other.role(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile(id: &str, email: &str) -> Profile {
        Profile {
            id: PrincipalId::new(id),
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: Email::parse(email).unwrap(),
            phone_number: "+1-555-0123".to_owned(),
            is_active: true,
            profile_image: None,
        }
    }

    fn worker() -> Member {
        Member::BranchWorker(BranchWorker {
            profile: profile("1", "john.doe@branch.com"),
            branch_id: BranchId::new("branch-1"),
            assigned_by: PrincipalId::new("merchant-1"),
        })
    }

    #[test]
    fn test_member_serializes_with_role_tag() {
        let json = serde_json::to_value(worker()).unwrap();
        assert_eq!(json["role"], "branch_worker");
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["branchId"], "branch-1");
        assert_eq!(json["assignedBy"], "merchant-1");
        assert!(json.get("profileImage").is_none());
    }

    #[test]
    fn test_member_reads_original_record_shape() {
        let raw = r#"{
            "id": "employee-1",
            "firstName": "Alex",
            "lastName": "Martinez",
            "email": "alex.martinez@loyaltypro.com",
            "phoneNumber": "+1-555-0200",
            "role": "employee",
            "isActive": true,
            "department": "Operations",
            "permissions": ["view_analytics"],
            "accessLevel": "manager"
        }"#;
        let member: Member = serde_json::from_str(raw).unwrap();
        assert_eq!(member.role(), Role::Employee);
        assert_eq!(member.full_name(), "Alex Martinez");
        let Member::Employee(employee) = member else {
            panic!("expected employee");
        };
        assert_eq!(employee.access_level, AccessLevel::Manager);
        assert!(employee.manager_id.is_none());
    }

    #[test]
    fn test_admin_serializes_as_admin_role() {
        let admin = Admin {
            profile: profile("admin-1", "admin@loyaltypro.com"),
        };
        let json = serde_json::to_value(&admin).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["id"], "admin-1");

        let back: Admin = serde_json::from_value(json).unwrap();
        assert_eq!(back, admin);
    }

    #[test]
    fn test_member_record_is_not_an_admin() {
        let json = serde_json::to_string(&worker()).unwrap();
        let err = serde_json::from_str::<Admin>(&json).unwrap_err();
        assert!(err.to_string().contains("branch_worker principal cannot be used as admin"));
    }

    #[test]
    fn test_admin_record_is_not_a_member() {
        let principal = Principal::Admin(profile("admin-1", "admin@loyaltypro.com"));
        let err = Member::try_from(principal).unwrap_err();
        assert_eq!(err.found, Role::Admin);
        assert_eq!(err.expected, "member");
    }

    #[test]
    fn test_merchant_optional_business_fields() {
        let raw = r#"{
            "role": "merchant_owner",
            "id": "merchant-1",
            "firstName": "Sarah",
            "lastName": "Johnson",
            "email": "sarah@loyaltypro.com",
            "phoneNumber": "+1-555-0100",
            "isActive": true,
            "businessInfo": {
                "businessName": "LoyaltyPro Business",
                "address": "123 Business Street",
                "contactInfo": "+1-555-0100"
            }
        }"#;
        let principal: Principal = serde_json::from_str(raw).unwrap();
        let Principal::MerchantOwner(owner) = principal else {
            panic!("expected merchant owner");
        };
        assert!(owner.business_info.legal_docs.is_empty());
        assert!(owner.business_info.business_image.is_none());
    }
}
