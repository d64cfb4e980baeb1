use crate::{
    roster::domain::model::enums::roster_domain_error::RosterDomainError,
    shared::domain::model::{
        entities::caller_context::CallerContext, value_objects::identity_email::IdentityEmail,
    },
};

#[derive(Clone, Debug)]
pub struct RemoveRosterEntryCommand {
    caller: CallerContext,
    email: IdentityEmail,
}

impl RemoveRosterEntryCommand {
    pub fn new(caller: CallerContext, email: String) -> Result<Self, RosterDomainError> {
        Ok(Self {
            caller,
            email: IdentityEmail::new(email).map_err(|_| RosterDomainError::InvalidEmail)?,
        })
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }
    pub fn email(&self) -> &IdentityEmail {
        &self.email
    }
}
