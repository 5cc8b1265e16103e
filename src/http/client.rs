use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{ProviderError, Resource};

/// HTTP client that tags every failure with the resource it was fetching
#[derive(Debug, Clone)]
pub struct ProviderHttpClient {
    client: Client,
}

impl ProviderHttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Resource,
    ) -> Result<T, ProviderError> {
        let response = self.send_get_request(url, &resource).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ProviderError::Decode { resource, source })
    }

    pub async fn get_bytes(&self, url: &str, resource: Resource) -> Result<Vec<u8>, ProviderError> {
        let response = self.send_get_request(url, &resource).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ProviderError::Transport { resource, source })?;
        Ok(bytes.to_vec())
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(
        &self,
        url: &str,
        resource: &Resource,
    ) -> Result<reqwest::Response, ProviderError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                resource: resource.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                resource: resource.clone(),
                status,
            });
        }
        Ok(response)
    }
}
