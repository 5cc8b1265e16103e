use chrono::{DateTime, Duration, Utc};
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Bootstrap;

#[derive(Debug, Clone)]
struct CachedBootstrap {
    data: Arc<Bootstrap>,
    fetched_at: DateTime<Utc>,
}

/// In-memory bootstrap cache with a fixed time-to-live.
///
/// Cloning shares the underlying slot, so one instance can be handed to every
/// request. Stale entries are never served once the TTL has passed.
#[derive(Debug, Clone)]
pub struct BootstrapCache {
    ttl: Duration,
    slot: Arc<RwLock<Option<CachedBootstrap>>>,
}

impl BootstrapCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs.max(0)),
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached data if it was fetched less than one TTL before `now`
    pub async fn get_fresh(&self, now: DateTime<Utc>) -> Option<Arc<Bootstrap>> {
        let guard = self.slot.read().await;
        guard
            .as_ref()
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.data.clone())
    }

    pub async fn store(&self, data: Bootstrap, now: DateTime<Utc>) -> Arc<Bootstrap> {
        let data = Arc::new(data);
        let mut guard = self.slot.write().await;
        *guard = Some(CachedBootstrap {
            data: data.clone(),
            fetched_at: now,
        });
        info!("Cached bootstrap data ({} players)", data.elements.len());
        data
    }

    pub async fn invalidate(&self) {
        let mut guard = self.slot.write().await;
        if guard.take().is_some() {
            info!("Invalidated bootstrap cache");
        }
    }

    /// Timestamp of the cached entry, fresh or not
    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().await.as_ref().map(|entry| entry.fetched_at)
    }

    fn is_fresh(&self, entry: &CachedBootstrap, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.fetched_at) < self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Element;

    fn bootstrap_with_players(n: u64) -> Bootstrap {
        Bootstrap {
            elements: (1..=n).map(|id| Element { id, ..Default::default() }).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_cache_has_nothing_fresh() {
        let cache = BootstrapCache::new(60);
        assert!(cache.get_fresh(Utc::now()).await.is_none());
        assert!(cache.fetched_at().await.is_none());
    }

    #[tokio::test]
    async fn entry_expires_after_ttl() {
        let cache = BootstrapCache::new(60);
        let t0 = Utc::now();
        cache.store(bootstrap_with_players(3), t0).await;

        let hit = cache.get_fresh(t0 + Duration::seconds(59)).await;
        assert_eq!(hit.map(|b| b.elements.len()), Some(3));
        assert!(cache.get_fresh(t0 + Duration::seconds(60)).await.is_none());
        assert_eq!(cache.fetched_at().await, Some(t0));
    }

    #[tokio::test]
    async fn invalidate_clears_shared_slot() {
        let cache = BootstrapCache::new(60);
        let shared = cache.clone();
        let now = Utc::now();
        cache.store(bootstrap_with_players(1), now).await;

        shared.invalidate().await;
        assert!(cache.get_fresh(now).await.is_none());
    }

    #[tokio::test]
    async fn zero_ttl_never_serves() {
        let cache = BootstrapCache::new(0);
        let now = Utc::now();
        cache.store(bootstrap_with_players(1), now).await;
        assert!(cache.get_fresh(now).await.is_none());
    }
}
