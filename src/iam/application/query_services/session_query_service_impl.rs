use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    iam::{
        domain::{
            model::{
                entities::authenticated_principal::AuthenticatedPrincipal,
                enums::iam_domain_error::IamDomainError,
                queries::authenticate_session_query::AuthenticateSessionQuery,
            },
            services::session_query_service::SessionQueryService,
        },
        infrastructure::crypto::{
            session_credential_codec::SessionCredentialCodec, token_vault::TokenVault,
        },
    },
    shared::domain::{
        clock::Clock, model::value_objects::third_party_access_token::ThirdPartyAccessToken,
    },
};

/// Stateless: everything needed is inside the presented credential.
pub struct SessionQueryServiceImpl {
    token_vault: Arc<dyn TokenVault>,
    credential_codec: Arc<dyn SessionCredentialCodec>,
    clock: Arc<dyn Clock>,
}

impl SessionQueryServiceImpl {
    pub fn new(
        token_vault: Arc<dyn TokenVault>,
        credential_codec: Arc<dyn SessionCredentialCodec>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            token_vault,
            credential_codec,
            clock,
        }
    }
}

#[async_trait]
impl SessionQueryService for SessionQueryServiceImpl {
    async fn handle_authenticate(
        &self,
        query: AuthenticateSessionQuery,
    ) -> Result<AuthenticatedPrincipal, IamDomainError> {
        let claims = self
            .credential_codec
            .verify(query.session_credential(), self.clock.now())?;

        let Some(plaintext) = self.token_vault.decrypt(&claims.encrypted_access_token) else {
            tracing::warn!(
                subject = %claims.subject,
                credential_id = %claims.credential_id,
                "embedded third-party token could not be decrypted"
            );
            return Err(IamDomainError::VaultDecryptFailure);
        };

        let access_token =
            ThirdPartyAccessToken::new(plaintext).map_err(|_| IamDomainError::VaultDecryptFailure)?;

        Ok(AuthenticatedPrincipal {
            claims,
            access_token,
        })
    }
}
