use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::{
    iam::infrastructure::identity::identity_provider_repository::{
        IdentityProfile, IdentityProviderError, IdentityProviderRepository,
    },
    shared::domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken,
};

#[derive(Deserialize)]
struct GoogleUserInfo {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<bool>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

#[derive(Clone)]
struct CachedProfile {
    profile: IdentityProfile,
    expires_at: Instant,
}

/// Google `oauth2/v3/userinfo` client with a short-lived, best-effort
/// profile cache keyed by the SHA-256 of the token.
pub struct GoogleIdentityProviderRepositoryImpl {
    http: Client,
    userinfo_url: String,
    cache_ttl: Duration,
    cache: RwLock<HashMap<String, CachedProfile>>,
}

impl GoogleIdentityProviderRepositoryImpl {
    pub fn new(http: Client, userinfo_url: String, cache_ttl: Duration) -> Self {
        Self {
            http,
            userinfo_url,
            cache_ttl,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn token_hash(access_token: &ThirdPartyAccessToken) -> String {
        let mut hasher = Sha256::new();
        hasher.update(access_token.expose().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn get_cached(&self, token_hash: &str) -> Option<IdentityProfile> {
        let guard = self.cache.read().await;
        guard.get(token_hash).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.profile.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(&self, token_hash: String, profile: IdentityProfile) {
        let now = Instant::now();
        let Some(expires_at) = now.checked_add(self.cache_ttl) else {
            return;
        };
        let mut guard = self.cache.write().await;
        guard.retain(|_, entry| entry.expires_at > now);
        guard.insert(token_hash, CachedProfile { profile, expires_at });
    }
}

#[async_trait]
impl IdentityProviderRepository for GoogleIdentityProviderRepositoryImpl {
    async fn fetch_profile(
        &self,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<IdentityProfile, IdentityProviderError> {
        let caching = !self.cache_ttl.is_zero();
        let token_hash = Self::token_hash(access_token);

        if caching {
            if let Some(cached) = self.get_cached(&token_hash).await {
                return Ok(cached);
            }
        }

        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token.expose())
            .send()
            .await
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "identity provider rejected access token");
            return Err(IdentityProviderError::Rejected {
                status: status.as_u16(),
            });
        }

        let user_info: GoogleUserInfo = response
            .json()
            .await
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        let profile = IdentityProfile {
            email: user_info.email,
            email_verified: user_info.email_verified,
            name: user_info.name,
            picture: user_info.picture,
        };

        if caching {
            self.set_cache(token_hash, profile.clone()).await;
        }

        Ok(profile)
    }
}
