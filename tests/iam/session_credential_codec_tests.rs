use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration;
use serde_json::Value;
use sheets_auth_gateway::iam::{
    domain::model::enums::iam_domain_error::IamDomainError,
    infrastructure::crypto::{
        jwt_session_credential_codec_impl::{JwtSessionCredentialCodecImpl, SESSION_ISSUER},
        session_credential_codec::SessionCredentialCodec,
    },
};

use crate::support::{SESSION_SECRET, fixed_now, sample_claims};

fn decode_json(segment: &str) -> Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).expect("base64url segment");
    serde_json::from_slice(&bytes).expect("json segment")
}

#[test]
fn signed_credential_verifies_to_the_same_claims() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let claims = sample_claims(fixed_now(), Duration::hours(8));

    let credential = codec.sign(&claims).expect("signing succeeds");
    let verified = codec
        .verify(&credential, fixed_now() + Duration::minutes(5))
        .expect("fresh credential verifies");

    assert_eq!(verified, claims);
}

#[test]
fn credential_is_a_compact_hs256_jws_with_wire_claim_names() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let claims = sample_claims(fixed_now(), Duration::hours(8));

    let credential = codec.sign(&claims).expect("signing succeeds");
    let segments: Vec<&str> = credential.split('.').collect();

    assert_eq!(segments.len(), 3);
    let header = decode_json(segments[0]);
    assert_eq!(header["alg"], "HS256");

    let payload = decode_json(segments[1]);
    assert_eq!(payload["iss"], SESSION_ISSUER);
    assert_eq!(payload["sub"], "boss@x.com");
    assert_eq!(payload["role"], "admin");
    assert_eq!(payload["eat"], "opaque-blob");
    assert_eq!(payload["iat"], fixed_now().timestamp());
    assert_eq!(payload["exp"], (fixed_now() + Duration::hours(8)).timestamp());
    assert!(payload.get("picture").is_none());
}

#[test]
fn credential_with_one_hour_window_is_rejected_two_hours_later() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let credential = codec
        .sign(&sample_claims(fixed_now(), Duration::hours(1)))
        .expect("signing succeeds");

    let result = codec.verify(&credential, fixed_now() + Duration::hours(2));

    assert!(matches!(result, Err(IamDomainError::InvalidSessionCredential)));
}

#[test]
fn credential_is_rejected_exactly_at_expiry() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let credential = codec
        .sign(&sample_claims(fixed_now(), Duration::hours(1)))
        .expect("signing succeeds");

    assert!(codec.verify(&credential, fixed_now() + Duration::seconds(3599)).is_ok());
    assert!(codec.verify(&credential, fixed_now() + Duration::hours(1)).is_err());
}

#[test]
fn tampered_payload_is_rejected() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let credential = codec
        .sign(&sample_claims(fixed_now(), Duration::hours(8)))
        .expect("signing succeeds");
    let segments: Vec<&str> = credential.split('.').collect();

    let mut payload = decode_json(segments[1]);
    payload["role"] = Value::String("admin".to_string());
    payload["sub"] = Value::String("intruder@x.com".to_string());
    let forged = format!(
        "{}.{}.{}",
        segments[0],
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).expect("json")),
        segments[2]
    );

    assert!(matches!(
        codec.verify(&forged, fixed_now()),
        Err(IamDomainError::InvalidSessionCredential)
    ));
}

#[test]
fn tampered_signature_is_rejected() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let credential = codec
        .sign(&sample_claims(fixed_now(), Duration::hours(8)))
        .expect("signing succeeds");
    let (signing_input, signature) = credential.rsplit_once('.').expect("three segments");

    let mut raw = URL_SAFE_NO_PAD.decode(signature).expect("signature bytes");
    raw[0] ^= 0x80;
    let forged = format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(raw));

    assert!(codec.verify(&forged, fixed_now()).is_err());
}

#[test]
fn credential_signed_with_another_secret_is_rejected() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let other = JwtSessionCredentialCodecImpl::new("another-secret-that-is-long-enough!!");
    let credential = other
        .sign(&sample_claims(fixed_now(), Duration::hours(8)))
        .expect("signing succeeds");

    assert!(matches!(
        codec.verify(&credential, fixed_now()),
        Err(IamDomainError::InvalidSessionCredential)
    ));
}

#[test]
fn malformed_credentials_are_rejected() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);

    for credential in ["", "abc", "a.b", "a.b.c.d", "!!.??.**"] {
        assert!(
            codec.verify(credential, fixed_now()).is_err(),
            "{credential:?} must not verify"
        );
    }
}

fn foreign_credential(algorithm: jsonwebtoken::Algorithm, issuer: &str) -> String {
    let claims = sample_claims(fixed_now(), Duration::hours(8));
    let payload = serde_json::json!({
        "iss": issuer,
        "jti": claims.credential_id,
        "sub": claims.subject.value(),
        "role": claims.role.as_str(),
        "eat": claims.encrypted_access_token,
        "eat_exp": claims.access_token_expires_at.timestamp(),
        "iat": claims.issued_at.timestamp(),
        "exp": claims.expires_at.timestamp(),
    });
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(algorithm),
        &payload,
        &jsonwebtoken::EncodingKey::from_secret(SESSION_SECRET.as_bytes()),
    )
    .expect("foreign credential signs")
}

#[test]
fn credential_from_another_issuer_is_rejected() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let credential = foreign_credential(jsonwebtoken::Algorithm::HS256, "someone-else");

    assert!(matches!(
        codec.verify(&credential, fixed_now()),
        Err(IamDomainError::InvalidSessionCredential)
    ));
}

#[test]
fn credential_signed_with_another_algorithm_is_rejected() {
    let codec = JwtSessionCredentialCodecImpl::new(SESSION_SECRET);
    let credential = foreign_credential(jsonwebtoken::Algorithm::HS512, SESSION_ISSUER);

    assert!(matches!(
        codec.verify(&credential, fixed_now()),
        Err(IamDomainError::InvalidSessionCredential)
    ));
}
