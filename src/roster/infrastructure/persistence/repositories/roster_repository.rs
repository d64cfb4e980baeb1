use async_trait::async_trait;

use crate::{
    roster::domain::model::{
        entities::{roster_entry::RosterEntry, roster_snapshot::RosterSnapshot},
        enums::roster_domain_error::RosterDomainError,
    },
    shared::domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken,
};

/// Storage for dynamic roster rows. Every call is made with the caller's token.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    async fn load(
        &self,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<RosterSnapshot, RosterDomainError>;

    async fn append(
        &self,
        access_token: &ThirdPartyAccessToken,
        entry: &RosterEntry,
    ) -> Result<Option<u32>, RosterDomainError>;

    async fn update(
        &self,
        access_token: &ThirdPartyAccessToken,
        row_number: u32,
        entry: &RosterEntry,
    ) -> Result<(), RosterDomainError>;

    async fn delete(
        &self,
        access_token: &ThirdPartyAccessToken,
        row_number: u32,
    ) -> Result<(), RosterDomainError>;
}
