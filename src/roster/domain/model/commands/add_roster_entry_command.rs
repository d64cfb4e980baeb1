use crate::{
    roster::domain::model::enums::roster_domain_error::RosterDomainError,
    shared::domain::model::{
        entities::caller_context::CallerContext, enums::user_role::UserRole,
        value_objects::identity_email::IdentityEmail,
    },
};

#[derive(Clone, Debug)]
pub struct AddRosterEntryCommand {
    caller: CallerContext,
    email: IdentityEmail,
    role: UserRole,
}

impl AddRosterEntryCommand {
    pub fn new(caller: CallerContext, email: String, role: String) -> Result<Self, RosterDomainError> {
        Ok(Self {
            caller,
            email: IdentityEmail::new(email).map_err(|_| RosterDomainError::InvalidEmail)?,
            role: role.parse().map_err(|_| RosterDomainError::InvalidRole)?,
        })
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }
    pub fn email(&self) -> &IdentityEmail {
        &self.email
    }
    pub fn role(&self) -> UserRole {
        self.role
    }
}
