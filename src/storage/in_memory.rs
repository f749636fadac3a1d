//! In-memory provider backend for testing and headless use

use crate::core::payload::ProviderPayload;
use crate::core::record::{GroupedProvider, ProviderRecord};
use crate::core::service::{ProviderCrud, ProviderSource};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory provider store
///
/// Implements both the read and the write side of the backend. Uses RwLock
/// for thread-safe access; clones share the same data.
#[derive(Clone)]
pub struct InMemoryProviderStore {
    providers: Arc<RwLock<IndexMap<Uuid, ProviderRecord>>>,
}

impl InMemoryProviderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-filled with records
    pub fn with_records(records: impl IntoIterator<Item = ProviderRecord>) -> Self {
        let providers = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            providers: Arc::new(RwLock::new(providers)),
        }
    }
}

impl Default for InMemoryProviderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderSource for InMemoryProviderStore {
    async fn list_grouped(&self) -> Result<Vec<GroupedProvider>> {
        Ok(self
            .list_raw()
            .await?
            .iter()
            .map(GroupedProvider::from_record)
            .collect())
    }

    async fn list_raw(&self) -> Result<Vec<ProviderRecord>> {
        let providers = self
            .providers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut records: Vec<ProviderRecord> = providers.values().cloned().collect();
        records.sort_by_key(|r| r.display_order);
        Ok(records)
    }

    async fn find(&self, id: &Uuid) -> Result<Option<ProviderRecord>> {
        let providers = self
            .providers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(providers.get(id).cloned())
    }
}

#[async_trait]
impl ProviderCrud for InMemoryProviderStore {
    async fn create(&self, payload: ProviderPayload) -> Result<ProviderRecord> {
        let mut providers = self
            .providers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let record = ProviderRecord::from_payload(Uuid::new_v4(), payload, Utc::now());
        providers.insert(record.id, record.clone());

        Ok(record)
    }

    async fn update(&self, id: &Uuid, payload: ProviderPayload) -> Result<ProviderRecord> {
        let mut providers = self
            .providers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let existing = providers
            .get_mut(id)
            .ok_or_else(|| anyhow!("Provider not found: {}", id))?;

        *existing = existing.updated_with(payload, Utc::now());

        Ok(existing.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut providers = self
            .providers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        providers
            .shift_remove(id)
            .ok_or_else(|| anyhow!("Provider not found: {}", id))?;

        Ok(())
    }
}
