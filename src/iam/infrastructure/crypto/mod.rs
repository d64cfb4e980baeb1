pub mod aes_gcm_token_vault_impl;
pub mod jwt_session_credential_codec_impl;
pub mod session_credential_codec;
pub mod token_vault;
