//! REST client for the provider backend
//!
//! Implements [`ProviderSource`] and [`ProviderCrud`] over HTTP. Enabled
//! with the `http` feature.

use crate::config::ApiConfig;
use crate::core::payload::ProviderPayload;
use crate::core::record::{GroupedProvider, ProviderRecord};
use crate::core::service::{ProviderCrud, ProviderSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use uuid::Uuid;

/// HTTP implementation of the provider backend
#[derive(Clone)]
pub struct HttpProviderClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl HttpProviderClient {
    /// Build a client with the configured timeout
    pub fn new(api: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, api })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

#[async_trait]
impl ProviderSource for HttpProviderClient {
    async fn list_grouped(&self) -> Result<Vec<GroupedProvider>> {
        let url = self.api.grouped_url();
        tracing::debug!(%url, "fetching grouped providers");
        let providers = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid grouped provider list")?;
        Ok(providers)
    }

    async fn list_raw(&self) -> Result<Vec<ProviderRecord>> {
        let url = self.api.providers_url();
        tracing::debug!(%url, "fetching provider records");
        let providers = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid provider list")?;
        Ok(providers)
    }

    async fn find(&self, id: &Uuid) -> Result<Option<ProviderRecord>> {
        let response = self.http.get(self.api.provider_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let record = response
            .error_for_status()?
            .json()
            .await
            .context("Invalid provider record")?;
        Ok(Some(record))
    }
}

#[async_trait]
impl ProviderCrud for HttpProviderClient {
    async fn create(&self, payload: ProviderPayload) -> Result<ProviderRecord> {
        let record = self
            .http
            .post(self.api.providers_url())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid provider record in create response")?;
        Ok(record)
    }

    async fn update(&self, id: &Uuid, payload: ProviderPayload) -> Result<ProviderRecord> {
        let record = self
            .http
            .put(self.api.provider_url(id))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid provider record in update response")?;
        Ok(record)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        self.http
            .delete(self.api.provider_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
