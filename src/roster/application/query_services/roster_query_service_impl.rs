use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    roster::{
        domain::{
            model::{
                entities::{roster_entry::RosterEntry, roster_snapshot::RosterSnapshot},
                enums::roster_domain_error::RosterDomainError,
                queries::list_roster_entries_query::ListRosterEntriesQuery,
                value_objects::bootstrap_admins::BootstrapAdmins,
            },
            services::roster_query_service::RosterQueryService,
        },
        infrastructure::persistence::repositories::roster_repository::RosterRepository,
    },
    shared::domain::model::{
        enums::user_role::UserRole,
        value_objects::{
            identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
        },
    },
};

#[derive(Clone, Debug)]
struct CachedSnapshot {
    snapshot: RosterSnapshot,
    expires_at: Instant,
}

pub struct RosterQueryServiceImpl {
    repository: Arc<dyn RosterRepository>,
    bootstrap_admins: BootstrapAdmins,
    cache_ttl: Duration,
    snapshot_cache: RwLock<Option<CachedSnapshot>>,
}

impl RosterQueryServiceImpl {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        bootstrap_admins: BootstrapAdmins,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            bootstrap_admins,
            cache_ttl,
            snapshot_cache: RwLock::new(None),
        }
    }

    async fn load_cached_snapshot(&self) -> Option<RosterSnapshot> {
        let read_guard = self.snapshot_cache.read().await;
        read_guard
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.snapshot.clone())
    }

    async fn cache_snapshot(&self, snapshot: RosterSnapshot) {
        if self.cache_ttl.is_zero() {
            return;
        }
        let Some(expires_at) = Instant::now().checked_add(self.cache_ttl) else {
            return;
        };
        let mut write_guard = self.snapshot_cache.write().await;
        *write_guard = Some(CachedSnapshot { snapshot, expires_at });
    }

    async fn snapshot(
        &self,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<RosterSnapshot, RosterDomainError> {
        if let Some(cached) = self.load_cached_snapshot().await {
            return Ok(cached);
        }

        // Concurrent misses each reload; last writer wins.
        let snapshot = self.repository.load(access_token).await?;
        self.cache_snapshot(snapshot.clone()).await;
        Ok(snapshot)
    }
}

#[async_trait]
impl RosterQueryService for RosterQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListRosterEntriesQuery,
    ) -> Result<Vec<RosterEntry>, RosterDomainError> {
        if !query.caller().is_admin() {
            return Err(RosterDomainError::AccessDenied);
        }

        let snapshot = self.snapshot(&query.caller().access_token).await?;

        Ok(self
            .bootstrap_admins
            .iter()
            .cloned()
            .map(RosterEntry::bootstrap)
            .chain(
                snapshot
                    .entries()
                    .iter()
                    .filter(|entry| !self.bootstrap_admins.contains(&entry.email))
                    .cloned(),
            )
            .collect())
    }

    async fn resolve_role(
        &self,
        email: &IdentityEmail,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<Option<UserRole>, RosterDomainError> {
        if self.bootstrap_admins.contains(email) {
            return Ok(Some(UserRole::Admin));
        }

        let snapshot = self.snapshot(access_token).await?;
        Ok(snapshot.role_for(&self.bootstrap_admins, email))
    }

    async fn invalidate_cache(&self) {
        self.snapshot_cache.write().await.take();
    }
}
