//! Editing session for one provider dialog
//!
//! An [`EditSession`] owns the form state of a single dialog. Edits go
//! through the provider's own operations; [`EditSession::submit`] is the
//! boundary where validation, payload building and the backend call happen
//! as one step. A failed submission leaves the form state untouched so the
//! user can retry.

use crate::core::error::{ProviderError, ProviderResult};
use crate::core::provider::PaymentProvider;
use crate::core::record::ProviderRecord;
use crate::core::service::{IconPicker, Notifier, ProviderCrud, ProviderSource, SubmitKind};
use std::sync::Arc;
use uuid::Uuid;

pub struct EditSession {
    provider: PaymentProvider,
    crud: Arc<dyn ProviderCrud>,
    notifier: Arc<dyn Notifier>,
}

impl EditSession {
    /// Session for creating a provider, starting from `provider`
    pub fn create(
        provider: PaymentProvider,
        crud: Arc<dyn ProviderCrud>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            crud,
            notifier,
        }
    }

    /// Session for editing the stored provider `id`
    pub async fn open(
        source: &dyn ProviderSource,
        id: &Uuid,
        crud: Arc<dyn ProviderCrud>,
        notifier: Arc<dyn Notifier>,
    ) -> ProviderResult<Self> {
        let record = source
            .find(id)
            .await
            .map_err(|e| ProviderError::backend("lookup", e))?
            .ok_or(ProviderError::NotFound { id: *id })?;

        tracing::debug!(
            provider_id = %id,
            mode = %record.numbering_mode,
            "opened provider for editing"
        );

        Ok(Self {
            provider: PaymentProvider::from_record(&record),
            crud,
            notifier,
        })
    }

    pub fn provider(&self) -> &PaymentProvider {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut PaymentProvider {
        &mut self.provider
    }

    /// True when editing an existing provider
    pub fn is_editing(&self) -> bool {
        self.provider.id.is_some()
    }

    /// Whether the save action should be enabled
    pub fn can_submit(&self) -> bool {
        self.provider.validate().is_ok()
    }

    /// Ask the media picker for an icon; keeps the current one on dismissal
    pub async fn pick_icon(&mut self, picker: &dyn IconPicker) -> ProviderResult<bool> {
        let picked = picker
            .pick()
            .await
            .map_err(|e| ProviderError::backend("icon selection", e))?;

        match picked {
            Some(icon) => {
                self.provider.set_icon(icon);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate, build the payload and send it to the backend.
    ///
    /// Creates when the provider has no id, updates otherwise. Validation
    /// failures and backend failures are both reported to the notifier.
    pub async fn submit(&self) -> ProviderResult<ProviderRecord> {
        if let Err(error) = self.provider.validate() {
            tracing::debug!(code = error.error_code(), "submission blocked by validation");
            self.notifier.validation_failed(&error);
            return Err(error.into());
        }

        let payload = self.provider.build_payload();
        let (kind, result) = match self.provider.id {
            Some(id) => (SubmitKind::Updated, self.crud.update(&id, payload).await),
            None => (SubmitKind::Created, self.crud.create(payload).await),
        };

        match result {
            Ok(record) => {
                tracing::info!(provider_id = %record.id, ?kind, "provider saved");
                self.notifier.submitted(kind);
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(error = %e, ?kind, "provider submission failed");
                self.notifier.submission_failed();
                Err(ProviderError::backend(operation_name(kind), e))
            }
        }
    }

    /// Delete the provider being edited
    pub async fn delete(&self) -> ProviderResult<()> {
        let Some(id) = self.provider.id else {
            return Err(ProviderError::NotSaved);
        };

        match self.crud.delete(&id).await {
            Ok(()) => {
                tracing::info!(provider_id = %id, "provider deleted");
                self.notifier.submitted(SubmitKind::Deleted);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(provider_id = %id, error = %e, "provider deletion failed");
                self.notifier.submission_failed();
                Err(ProviderError::backend("delete", e))
            }
        }
    }
}

fn operation_name(kind: SubmitKind) -> &'static str {
    match kind {
        SubmitKind::Created => "create",
        SubmitKind::Updated => "update",
        SubmitKind::Deleted => "delete",
    }
}
