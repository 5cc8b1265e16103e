use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::cache::BootstrapCache;
use crate::config::ProviderSettings;
use crate::domain::{Bootstrap, EntryInfo, Fixture, Gameweek, Pick, PicksPayload, Snapshot};
use crate::errors::{ProviderError, Resource};
use crate::http::ProviderHttpClient;

/// Fantasy Premier League API client
#[derive(Debug, Clone)]
pub struct FplClient {
    client: ProviderHttpClient,
    cache: BootstrapCache,
    api_base_url: String,
    photo_base_url: String,
}

impl FplClient {
    /// Create a client with its own bootstrap cache
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let cache = BootstrapCache::new(settings.bootstrap_ttl_secs);
        Self::with_cache(settings, cache)
    }

    pub fn with_cache(settings: &ProviderSettings, cache: BootstrapCache) -> Result<Self> {
        let client = ProviderHttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            cache,
            api_base_url: settings.api_base_url.clone(),
            photo_base_url: settings.photo_base_url.clone(),
        })
    }

    pub fn cache(&self) -> &BootstrapCache {
        &self.cache
    }

    /// Players, teams and gameweeks; served from cache while fresh
    pub async fn get_bootstrap(&self) -> Result<Arc<Bootstrap>, ProviderError> {
        if let Some(cached) = self.cache.get_fresh(Utc::now()).await {
            return Ok(cached);
        }
        self.fetch_bootstrap().await
    }

    /// Drop the cached bootstrap and fetch it again
    pub async fn refresh_bootstrap(&self) -> Result<Arc<Bootstrap>, ProviderError> {
        self.cache.invalidate().await;
        self.fetch_bootstrap().await
    }

    pub async fn get_current_gameweek(&self) -> Result<Gameweek, ProviderError> {
        let bootstrap = self.get_bootstrap().await?;
        bootstrap.current_gameweek().ok_or(ProviderError::NoGameweeks)
    }

    pub async fn get_entry(&self, manager_id: u64) -> Result<EntryInfo, ProviderError> {
        let url = self.build_entry_url(manager_id);
        self.client.get_json(&url, Resource::Entry(manager_id)).await
    }

    pub async fn get_picks(
        &self,
        manager_id: u64,
        gameweek: Gameweek,
    ) -> Result<Vec<Pick>, ProviderError> {
        let url = self.build_picks_url(manager_id, gameweek);
        let payload: PicksPayload = self
            .client
            .get_json(&url, Resource::Picks { manager_id, gameweek })
            .await?;
        Ok(payload.into_picks())
    }

    pub async fn get_fixtures(&self) -> Result<Vec<Fixture>, ProviderError> {
        let url = self.build_fixtures_url();
        self.client.get_json(&url, Resource::Fixtures).await
    }

    /// Raw photo bytes, or `None` when the CDN cannot serve them
    pub async fn fetch_photo(&self, code: u64) -> Option<Vec<u8>> {
        let url = self.build_photo_url(code);
        match self.client.get_bytes(&url, Resource::Photo(code)).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Fetch everything a manager-scoped request needs, one call after another
    pub async fn load_snapshot(&self, manager_id: u64) -> Result<Snapshot, ProviderError> {
        let bootstrap = self.get_bootstrap().await?;
        let current_gameweek = bootstrap
            .current_gameweek()
            .ok_or(ProviderError::NoGameweeks)?;
        let entry = self.get_entry(manager_id).await?;
        let picks = self.get_picks(manager_id, current_gameweek).await?;
        let fixtures = self.get_fixtures().await?;

        Ok(Snapshot::new(
            manager_id,
            current_gameweek,
            bootstrap,
            entry,
            picks,
            fixtures,
        ))
    }

    async fn fetch_bootstrap(&self) -> Result<Arc<Bootstrap>, ProviderError> {
        let url = self.build_bootstrap_url();
        info!("Fetching bootstrap data from {}", url);
        let bootstrap: Bootstrap = self.client.get_json(&url, Resource::Bootstrap).await?;
        Ok(self.cache.store(bootstrap, Utc::now()).await)
    }

    // --- Helper Methods ---

    fn build_bootstrap_url(&self) -> String {
        format!("{}/bootstrap-static/", self.api_base_url)
    }

    fn build_entry_url(&self, manager_id: u64) -> String {
        format!("{}/entry/{}/", self.api_base_url, manager_id)
    }

    fn build_picks_url(&self, manager_id: u64, gameweek: Gameweek) -> String {
        format!("{}/entry/{}/event/{}/picks/", self.api_base_url, manager_id, gameweek)
    }

    fn build_fixtures_url(&self) -> String {
        format!("{}/fixtures/", self.api_base_url)
    }

    fn build_photo_url(&self, code: u64) -> String {
        format!("{}/p{}.png", self.photo_base_url, code)
    }
}
