use async_trait::async_trait;

use crate::iam::domain::model::{
    entities::authenticated_principal::AuthenticatedPrincipal,
    enums::iam_domain_error::IamDomainError,
    queries::authenticate_session_query::AuthenticateSessionQuery,
};

#[async_trait]
pub trait SessionQueryService: Send + Sync {
    async fn handle_authenticate(
        &self,
        query: AuthenticateSessionQuery,
    ) -> Result<AuthenticatedPrincipal, IamDomainError>;
}
