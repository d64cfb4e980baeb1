use async_trait::async_trait;

use crate::roster::domain::model::{
    commands::{
        add_roster_entry_command::AddRosterEntryCommand,
        change_roster_entry_role_command::ChangeRosterEntryRoleCommand,
        remove_roster_entry_command::RemoveRosterEntryCommand,
    },
    entities::roster_entry::RosterEntry,
    enums::roster_domain_error::RosterDomainError,
};

#[async_trait]
pub trait RosterCommandService: Send + Sync {
    async fn handle_add(&self, command: AddRosterEntryCommand)
    -> Result<RosterEntry, RosterDomainError>;

    async fn handle_change_role(
        &self,
        command: ChangeRosterEntryRoleCommand,
    ) -> Result<RosterEntry, RosterDomainError>;

    async fn handle_remove(&self, command: RemoveRosterEntryCommand) -> Result<(), RosterDomainError>;
}
