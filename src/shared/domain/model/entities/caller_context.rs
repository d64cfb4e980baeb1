use crate::shared::domain::model::{
    enums::user_role::UserRole,
    value_objects::{
        identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
    },
};

/// Authenticated caller as seen by the roster and sheets contexts: who is
/// asking, with which role, and the capability to act on their behalf.
#[derive(Clone, Debug)]
pub struct CallerContext {
    pub email: IdentityEmail,
    pub role: UserRole,
    pub access_token: ThirdPartyAccessToken,
}

impl CallerContext {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
