use chrono::{DateTime, Utc};

use crate::iam::domain::model::{
    entities::session_claims::SessionClaims, enums::iam_domain_error::IamDomainError,
};

pub trait SessionCredentialCodec: Send + Sync {
    fn sign(&self, claims: &SessionClaims) -> Result<String, IamDomainError>;

    /// Fails with `InvalidSessionCredential` unless the signature, issuer,
    /// expiry at `now`, and every claim check out.
    fn verify(&self, credential: &str, now: DateTime<Utc>) -> Result<SessionClaims, IamDomainError>;
}
