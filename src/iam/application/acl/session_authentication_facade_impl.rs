use std::sync::Arc;

use async_trait::async_trait;

use crate::iam::{
    domain::{
        model::{
            entities::authenticated_principal::AuthenticatedPrincipal,
            enums::iam_domain_error::IamDomainError,
            queries::authenticate_session_query::AuthenticateSessionQuery,
        },
        services::session_query_service::SessionQueryService,
    },
    interfaces::acl::session_authentication_facade::SessionAuthenticationFacade,
};

pub struct SessionAuthenticationFacadeImpl {
    query_service: Arc<dyn SessionQueryService>,
}

impl SessionAuthenticationFacadeImpl {
    pub fn new(query_service: Arc<dyn SessionQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl SessionAuthenticationFacade for SessionAuthenticationFacadeImpl {
    async fn authenticate(
        &self,
        session_credential: &str,
    ) -> Result<AuthenticatedPrincipal, IamDomainError> {
        let query = AuthenticateSessionQuery::new(session_credential.to_string())?;
        self.query_service.handle_authenticate(query).await
    }
}
