//! Collaborator traits
//!
//! The configuration model never talks to the network or the UI directly.
//! These traits describe what it needs from the outside: a source of
//! provider records, a CRUD backend, a media picker and a notifier.

use crate::core::error::ValidationError;
use crate::core::payload::ProviderPayload;
use crate::core::provider::IconRef;
use crate::core::record::{GroupedProvider, ProviderRecord};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read side of the provider backend
#[async_trait]
pub trait ProviderSource: Send + Sync {
    /// Listing view with accounts flattened per currency
    async fn list_grouped(&self) -> Result<Vec<GroupedProvider>>;

    /// Full records as stored
    async fn list_raw(&self) -> Result<Vec<ProviderRecord>>;

    /// Look a provider up before opening the edit dialog
    async fn find(&self, id: &Uuid) -> Result<Option<ProviderRecord>>;
}

/// Write side of the provider backend
#[async_trait]
pub trait ProviderCrud: Send + Sync {
    async fn create(&self, payload: ProviderPayload) -> Result<ProviderRecord>;

    async fn update(&self, id: &Uuid, payload: ProviderPayload) -> Result<ProviderRecord>;

    async fn delete(&self, id: &Uuid) -> Result<()>;
}

/// Media picker; the returned reference is stored, never interpreted
#[async_trait]
pub trait IconPicker: Send + Sync {
    /// `None` when the user dismissed the picker
    async fn pick(&self) -> Result<Option<IconRef>>;
}

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Created,
    Updated,
    Deleted,
}

/// Receives outcome signals and resolves them to user-facing messages
pub trait Notifier: Send + Sync {
    fn validation_failed(&self, error: &ValidationError);

    fn submitted(&self, kind: SubmitKind);

    fn submission_failed(&self);
}

/// Notifier that only logs; useful for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn validation_failed(&self, error: &ValidationError) {
        tracing::info!(key = error.message_key(), "provider validation failed");
    }

    fn submitted(&self, kind: SubmitKind) {
        tracing::info!(?kind, "provider submitted");
    }

    fn submission_failed(&self) {
        tracing::warn!("provider submission failed");
    }
}
