use async_trait::async_trait;

use crate::{
    roster::domain::model::{
        entities::roster_entry::RosterEntry, enums::roster_domain_error::RosterDomainError,
        queries::list_roster_entries_query::ListRosterEntriesQuery,
    },
    shared::domain::model::{
        enums::user_role::UserRole,
        value_objects::{
            identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
        },
    },
};

#[async_trait]
pub trait RosterQueryService: Send + Sync {
    /// Bootstrap admins first, then roster rows in sheet order.
    async fn handle_list(
        &self,
        query: ListRosterEntriesQuery,
    ) -> Result<Vec<RosterEntry>, RosterDomainError>;

    /// `None` when the identity is neither a bootstrap admin nor on the roster.
    async fn resolve_role(
        &self,
        email: &IdentityEmail,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<Option<UserRole>, RosterDomainError>;

    async fn invalidate_cache(&self);
}
