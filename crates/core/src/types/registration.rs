//! Merchant self-registration payload.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::principal::BusinessProfile;

/// Details submitted by a prospective merchant owner on the sign-up form.
///
/// Personal and business fields arrive as one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone_number: String,
    #[serde(flatten)]
    pub business: BusinessProfile,
}
