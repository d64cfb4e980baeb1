use aes_gcm::{
    Aes256Gcm, KeyInit,
    aead::{AeadInPlace, generic_array::GenericArray},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

use crate::iam::{
    domain::model::enums::iam_domain_error::IamDomainError,
    infrastructure::crypto::token_vault::TokenVault,
};

pub const NONCE_LENGTH: usize = 12;
pub const TAG_LENGTH: usize = 16;

/// AES-256-GCM vault keyed by SHA-256 of the server secret.
///
/// Blob layout: `base64url(nonce ‖ tag ‖ ciphertext)`, no padding.
pub struct AesGcmTokenVaultImpl {
    cipher: Aes256Gcm,
}

impl AesGcmTokenVaultImpl {
    pub fn new(server_secret: &str) -> Self {
        let key = Sha256::digest(server_secret.as_bytes());
        Self {
            cipher: Aes256Gcm::new(&key),
        }
    }
}

impl TokenVault for AesGcmTokenVaultImpl {
    fn encrypt(&self, plaintext: &str) -> Result<String, IamDomainError> {
        let mut nonce = [0u8; NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce);

        let mut buffer = plaintext.as_bytes().to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut buffer)
            .map_err(|_| IamDomainError::InfrastructureError("token encryption failed".to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LENGTH + TAG_LENGTH + buffer.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&tag);
        blob.extend_from_slice(&buffer);

        Ok(URL_SAFE_NO_PAD.encode(blob))
    }

    fn decrypt(&self, blob: &str) -> Option<String> {
        let raw = URL_SAFE_NO_PAD.decode(blob.trim()).ok()?;
        if raw.len() < NONCE_LENGTH + TAG_LENGTH {
            return None;
        }

        let (nonce, rest) = raw.split_at(NONCE_LENGTH);
        let (tag, ciphertext) = rest.split_at(TAG_LENGTH);

        let mut buffer = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(nonce),
                b"",
                &mut buffer,
                GenericArray::from_slice(tag),
            )
            .ok()?;

        String::from_utf8(buffer).ok()
    }
}
