//! Built-in demo accounts.
//!
//! The console ships with one account per role. Member accounts sign in to
//! the regular console, the admin account to the admin panel only.

use loyalty_pro_core::{
    AccessLevel, Admin, BranchId, BranchWorker, BusinessProfile, Email, EmailError, Employee,
    Identity, Member, MerchantOwner, PrincipalId, Profile,
};

use super::CredentialTable;

/// Shared secret of the three member demo accounts.
pub const MEMBER_DEMO_PASSWORD: &str = "password123";

/// Secret of the admin demo account.
pub const ADMIN_DEMO_PASSWORD: &str = "admin123";

const MERCHANT_LOGO: &str = "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=400";

fn profile(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
) -> Result<Profile, EmailError> {
    Ok(Profile {
        id: PrincipalId::new(id),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: Email::parse(email)?,
        phone_number: phone_number.to_owned(),
        is_active: true,
        profile_image: None,
    })
}

/// John Doe, branch worker at `branch-1`.
///
/// # Errors
///
/// Returns `EmailError` if the built-in address fails validation.
pub fn branch_worker() -> Result<Member, EmailError> {
    Ok(Member::BranchWorker(BranchWorker {
        profile: profile("1", "John", "Doe", "john.doe@branch.com", "+1-555-0123")?,
        branch_id: BranchId::new("branch-1"),
        assigned_by: PrincipalId::new("merchant-1"),
    }))
}

/// Sarah Johnson, owner of LoyaltyPro Business.
///
/// # Errors
///
/// Returns `EmailError` if the built-in address fails validation.
pub fn merchant_owner() -> Result<Member, EmailError> {
    Ok(Member::MerchantOwner(MerchantOwner {
        profile: profile(
            "merchant-1",
            "Sarah",
            "Johnson",
            "sarah@loyaltypro.com",
            "+1-555-0100",
        )?,
        business_info: BusinessProfile {
            business_name: "LoyaltyPro Business".to_owned(),
            address: "123 Business Street, City, State 12345".to_owned(),
            contact_info: "+1-555-0100".to_owned(),
            legal_docs: Vec::new(),
            business_image: Some(MERCHANT_LOGO.to_owned()),
        },
    }))
}

/// Alex Martinez, operations manager.
///
/// # Errors
///
/// Returns `EmailError` if the built-in address fails validation.
pub fn employee() -> Result<Member, EmailError> {
    let permissions = [
        "view_all_customers",
        "manage_transactions",
        "generate_reports",
        "view_analytics",
        "manage_branches",
        "view_workers",
    ];

    Ok(Member::Employee(Employee {
        profile: profile(
            "employee-1",
            "Alex",
            "Martinez",
            "alex.martinez@loyaltypro.com",
            "+1-555-0200",
        )?,
        department: "Operations".to_owned(),
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
        manager_id: None,
        access_level: AccessLevel::Manager,
    }))
}

/// The platform administrator.
///
/// # Errors
///
/// Returns `EmailError` if the built-in address fails validation.
pub fn admin() -> Result<Admin, EmailError> {
    Ok(Admin {
        profile: profile(
            "admin-1",
            "System",
            "Administrator",
            "admin@loyaltypro.com",
            "+1-555-0001",
        )?,
    })
}

/// Credential table for the regular console.
///
/// # Errors
///
/// Returns `EmailError` if a built-in address fails validation.
pub fn member_table() -> Result<CredentialTable<Member>, EmailError> {
    let mut table = CredentialTable::new();
    for member in [branch_worker()?, merchant_owner()?, employee()?] {
        let identifier = member.profile().email.as_str().to_owned();
        table = table.with_account(identifier, MEMBER_DEMO_PASSWORD, member);
    }
    Ok(table)
}

/// Credential table for the admin panel.
///
/// # Errors
///
/// Returns `EmailError` if the built-in address fails validation.
pub fn admin_table() -> Result<CredentialTable<Admin>, EmailError> {
    let admin = admin()?;
    let identifier = admin.profile.email.as_str().to_owned();
    Ok(CredentialTable::new().with_account(identifier, ADMIN_DEMO_PASSWORD, admin))
}
