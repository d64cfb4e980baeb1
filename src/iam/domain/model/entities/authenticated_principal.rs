use crate::{
    iam::domain::model::entities::session_claims::SessionClaims,
    shared::domain::model::{
        entities::caller_context::CallerContext,
        value_objects::third_party_access_token::ThirdPartyAccessToken,
    },
};

/// A verified session together with its decrypted third-party token.
/// Lives only for the request that produced it.
#[derive(Clone, Debug)]
pub struct AuthenticatedPrincipal {
    pub claims: SessionClaims,
    pub access_token: ThirdPartyAccessToken,
}

impl AuthenticatedPrincipal {
    pub fn caller_context(&self) -> CallerContext {
        CallerContext {
            email: self.claims.subject.clone(),
            role: self.claims.role,
            access_token: self.access_token.clone(),
        }
    }
}
