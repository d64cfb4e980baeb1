use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    iam::interfaces::acl::role_directory_facade::{RoleDirectoryError, RoleDirectoryFacade},
    roster::domain::services::roster_query_service::RosterQueryService,
    shared::domain::model::{
        enums::user_role::UserRole,
        value_objects::{
            identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
        },
    },
};

/// Lets the session issuer resolve roles from the roster.
///
/// The roster is read with the caller's own Google token. While a snapshot
/// is cached, a roster user resolves from it even if their token could not
/// read the sheet; once the cache is cold the same user gets a 401/403 from
/// Google and is treated as absent. Roster users therefore need read access
/// to the roster tab for sign-in to behave the same either way.
pub struct RoleDirectoryFacadeImpl {
    query_service: Arc<dyn RosterQueryService>,
}

impl RoleDirectoryFacadeImpl {
    pub fn new(query_service: Arc<dyn RosterQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl RoleDirectoryFacade for RoleDirectoryFacadeImpl {
    async fn resolve_role(
        &self,
        email: &IdentityEmail,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<Option<UserRole>, RoleDirectoryError> {
        match self.query_service.resolve_role(email, access_token).await {
            Ok(role) => Ok(role),
            // Cold cache and the caller's token cannot read the roster.
            Err(error) if error.is_authorization_failure() => {
                tracing::warn!(subject = %email, %error, "roster unreadable with caller token");
                Ok(None)
            }
            Err(error) => Err(RoleDirectoryError::Unavailable(error.to_string())),
        }
    }
}
