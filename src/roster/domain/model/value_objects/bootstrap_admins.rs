use std::collections::BTreeSet;

use crate::shared::domain::model::value_objects::identity_email::IdentityEmail;

/// Deploy-time admin set. Always admin, never editable at runtime.
#[derive(Clone, Debug, Default)]
pub struct BootstrapAdmins(BTreeSet<IdentityEmail>);

impl BootstrapAdmins {
    pub fn new(emails: BTreeSet<IdentityEmail>) -> Self {
        Self(emails)
    }

    pub fn contains(&self, email: &IdentityEmail) -> bool {
        self.0.contains(email)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentityEmail> {
        self.0.iter()
    }
}
