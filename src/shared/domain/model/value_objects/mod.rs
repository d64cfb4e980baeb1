pub mod identity_email;
pub mod third_party_access_token;
