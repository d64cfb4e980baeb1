use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    roster::{
        domain::{
            model::{
                commands::{
                    add_roster_entry_command::AddRosterEntryCommand,
                    change_roster_entry_role_command::ChangeRosterEntryRoleCommand,
                    remove_roster_entry_command::RemoveRosterEntryCommand,
                },
                entities::roster_entry::RosterEntry,
                enums::{
                    roster_domain_error::RosterDomainError, roster_entry_source::RosterEntrySource,
                },
                value_objects::bootstrap_admins::BootstrapAdmins,
            },
            services::{
                roster_command_service::RosterCommandService,
                roster_query_service::RosterQueryService,
            },
        },
        infrastructure::persistence::repositories::roster_repository::RosterRepository,
    },
    shared::domain::{
        clock::Clock,
        model::{entities::caller_context::CallerContext, value_objects::identity_email::IdentityEmail},
    },
};

pub struct RosterCommandServiceImpl {
    repository: Arc<dyn RosterRepository>,
    query_service: Arc<dyn RosterQueryService>,
    bootstrap_admins: BootstrapAdmins,
    clock: Arc<dyn Clock>,
}

impl RosterCommandServiceImpl {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        query_service: Arc<dyn RosterQueryService>,
        bootstrap_admins: BootstrapAdmins,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            query_service,
            bootstrap_admins,
            clock,
        }
    }

    fn authorize(&self, caller: &CallerContext, target: &IdentityEmail) -> Result<(), RosterDomainError> {
        if !caller.is_admin() {
            return Err(RosterDomainError::AccessDenied);
        }
        if self.bootstrap_admins.contains(target) {
            return Err(RosterDomainError::BootstrapAdminImmutable);
        }
        Ok(())
    }

    /// Reads the sheet directly; row numbers from the cache may be stale.
    async fn locate(
        &self,
        caller: &CallerContext,
        email: &IdentityEmail,
    ) -> Result<(u32, RosterEntry), RosterDomainError> {
        let snapshot = self.repository.load(&caller.access_token).await?;
        let entry = snapshot
            .find(email)
            .cloned()
            .ok_or(RosterDomainError::EntryNotFound)?;
        let row_number = entry.row_number.ok_or_else(|| {
            RosterDomainError::InfrastructureError("roster entry has no row".to_string())
        })?;
        Ok((row_number, entry))
    }
}

#[async_trait]
impl RosterCommandService for RosterCommandServiceImpl {
    async fn handle_add(
        &self,
        command: AddRosterEntryCommand,
    ) -> Result<RosterEntry, RosterDomainError> {
        let caller = command.caller();
        self.authorize(caller, command.email())?;

        let snapshot = self.repository.load(&caller.access_token).await?;
        if snapshot.find(command.email()).is_some() {
            return Err(RosterDomainError::EntryAlreadyExists);
        }

        let mut entry = RosterEntry {
            email: command.email().clone(),
            role: command.role(),
            source: RosterEntrySource::Roster,
            row_number: None,
            added_by: Some(caller.email.value().to_string()),
            added_at: Some(self.clock.now_seconds()),
        };
        entry.row_number = self.repository.append(&caller.access_token, &entry).await?;
        self.query_service.invalidate_cache().await;

        tracing::info!(
            actor = %caller.email,
            subject = %entry.email,
            role = %entry.role,
            row = ?entry.row_number,
            "roster entry added"
        );

        Ok(entry)
    }

    async fn handle_change_role(
        &self,
        command: ChangeRosterEntryRoleCommand,
    ) -> Result<RosterEntry, RosterDomainError> {
        let caller = command.caller();
        self.authorize(caller, command.email())?;

        let (row_number, current) = self.locate(caller, command.email()).await?;
        let entry = RosterEntry {
            role: command.role(),
            added_by: Some(caller.email.value().to_string()),
            added_at: Some(self.clock.now_seconds()),
            ..current
        };

        self.repository
            .update(&caller.access_token, row_number, &entry)
            .await?;
        self.query_service.invalidate_cache().await;

        tracing::info!(
            actor = %caller.email,
            subject = %entry.email,
            role = %entry.role,
            row = row_number,
            "roster entry role changed"
        );

        Ok(entry)
    }

    async fn handle_remove(&self, command: RemoveRosterEntryCommand) -> Result<(), RosterDomainError> {
        let caller = command.caller();
        self.authorize(caller, command.email())?;

        let (row_number, _) = self.locate(caller, command.email()).await?;
        self.repository
            .delete(&caller.access_token, row_number)
            .await?;
        self.query_service.invalidate_cache().await;

        tracing::info!(
            actor = %caller.email,
            subject = %command.email(),
            row = row_number,
            "roster entry removed"
        );

        Ok(())
    }
}
