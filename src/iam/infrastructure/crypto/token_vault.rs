use crate::iam::domain::model::enums::iam_domain_error::IamDomainError;

/// Seals third-party tokens into opaque blobs that can travel inside a
/// client-held credential.
pub trait TokenVault: Send + Sync {
    fn encrypt(&self, plaintext: &str) -> Result<String, IamDomainError>;

    /// `None` for any malformed, tampered, or foreign blob.
    fn decrypt(&self, blob: &str) -> Option<String>;
}
