use async_trait::async_trait;

use crate::iam::domain::model::{
    entities::authenticated_principal::AuthenticatedPrincipal,
    enums::iam_domain_error::IamDomainError,
};

/// Entry point other contexts use to turn a bearer credential into a caller.
#[async_trait]
pub trait SessionAuthenticationFacade: Send + Sync {
    async fn authenticate(
        &self,
        session_credential: &str,
    ) -> Result<AuthenticatedPrincipal, IamDomainError>;
}
