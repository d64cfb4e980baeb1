use crate::{
    roster::domain::model::{
        entities::roster_entry::RosterEntry, value_objects::bootstrap_admins::BootstrapAdmins,
    },
    shared::domain::model::{enums::user_role::UserRole, value_objects::identity_email::IdentityEmail},
};

/// Roster rows as read from the sheet at one point in time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RosterSnapshot {
    entries: Vec<RosterEntry>,
}

impl RosterSnapshot {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// First row wins when the sheet lists an email more than once.
    pub fn find(&self, email: &IdentityEmail) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| &entry.email == email)
    }

    pub fn role_for(&self, bootstrap: &BootstrapAdmins, email: &IdentityEmail) -> Option<UserRole> {
        if bootstrap.contains(email) {
            return Some(UserRole::Admin);
        }
        self.find(email).map(|entry| entry.role)
    }
}
