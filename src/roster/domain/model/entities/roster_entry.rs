use chrono::{DateTime, Utc};

use crate::{
    roster::domain::model::enums::roster_entry_source::RosterEntrySource,
    shared::domain::model::{enums::user_role::UserRole, value_objects::identity_email::IdentityEmail},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RosterEntry {
    pub email: IdentityEmail,
    pub role: UserRole,
    pub source: RosterEntrySource,
    /// Sheet row holding the entry; `None` for bootstrap admins.
    pub row_number: Option<u32>,
    pub added_by: Option<String>,
    pub added_at: Option<DateTime<Utc>>,
}

impl RosterEntry {
    pub fn bootstrap(email: IdentityEmail) -> Self {
        Self {
            email,
            role: UserRole::Admin,
            source: RosterEntrySource::Bootstrap,
            row_number: None,
            added_by: None,
            added_at: None,
        }
    }
}
