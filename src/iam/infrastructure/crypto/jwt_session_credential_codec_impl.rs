use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    iam::{
        domain::model::{
            entities::session_claims::SessionClaims, enums::iam_domain_error::IamDomainError,
        },
        infrastructure::crypto::session_credential_codec::SessionCredentialCodec,
    },
    shared::domain::model::value_objects::identity_email::IdentityEmail,
};

pub const SESSION_ISSUER: &str = "sheets-auth-gateway";

#[derive(Serialize, Deserialize)]
struct CredentialPayload {
    iss: String,
    jti: String,
    sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    role: String,
    eat: String,
    eat_exp: i64,
    iat: i64,
    exp: i64,
}

/// HS256 JWT over the session claims.
pub struct JwtSessionCredentialCodecImpl {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionCredentialCodecImpl {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[SESSION_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iat", "iss", "sub"]);
        validation.validate_aud = false;
        // Expiry is checked against the injected clock in `verify`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl SessionCredentialCodec for JwtSessionCredentialCodecImpl {
    fn sign(&self, claims: &SessionClaims) -> Result<String, IamDomainError> {
        let payload = CredentialPayload {
            iss: SESSION_ISSUER.to_string(),
            jti: claims.credential_id.clone(),
            sub: claims.subject.value().to_string(),
            name: claims.display_name.clone(),
            picture: claims.picture_url.clone(),
            role: claims.role.as_str().to_string(),
            eat: claims.encrypted_access_token.clone(),
            eat_exp: claims.access_token_expires_at.timestamp(),
            iat: claims.issued_at.timestamp(),
            exp: claims.expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| IamDomainError::InfrastructureError(e.to_string()))
    }

    fn verify(&self, credential: &str, now: DateTime<Utc>) -> Result<SessionClaims, IamDomainError> {
        let payload = decode::<CredentialPayload>(credential.trim(), &self.decoding_key, &self.validation)
            .map_err(|_| IamDomainError::InvalidSessionCredential)?
            .claims;

        let claims = SessionClaims {
            credential_id: payload.jti,
            subject: IdentityEmail::new(payload.sub)
                .map_err(|_| IamDomainError::InvalidSessionCredential)?,
            display_name: payload.name,
            picture_url: payload.picture,
            role: payload
                .role
                .parse()
                .map_err(|_| IamDomainError::InvalidSessionCredential)?,
            encrypted_access_token: payload.eat,
            access_token_expires_at: from_epoch(payload.eat_exp)?,
            issued_at: from_epoch(payload.iat)?,
            expires_at: from_epoch(payload.exp)?,
        };

        if claims.is_expired_at(now) {
            return Err(IamDomainError::InvalidSessionCredential);
        }

        Ok(claims)
    }
}

fn from_epoch(seconds: i64) -> Result<DateTime<Utc>, IamDomainError> {
    DateTime::from_timestamp(seconds, 0).ok_or(IamDomainError::InvalidSessionCredential)
}
