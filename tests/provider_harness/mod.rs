//! Shared test harness for provider editing tests
//!
//! Provides fixture builders for common provider states, a notifier that
//! records what it was told, a CRUD backend that always fails, and a fixed
//! icon picker.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod provider_harness;
//! use provider_harness::*;
//! ```

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, Once};
use uuid::Uuid;

use local_payments::prelude::*;

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Stored record with the given numbering data and no id-dependent fields
fn record(
    name: &str,
    mode: NumberingMode,
    shared_number: Option<&str>,
    currencies: &[CurrencyCode],
    accounts: Vec<CurrencyAccount>,
) -> ProviderRecord {
    ProviderRecord {
        id: Uuid::new_v4(),
        provider_name: name.to_string(),
        icon: None,
        icon_id: None,
        provider_type: ProviderType::default(),
        numbering_mode: mode,
        shared_account_number: shared_number.map(str::to_string),
        supported_currencies: currencies.to_vec(),
        accounts,
        is_active: true,
        display_order: 0,
        notes: None,
        created_at: None,
        updated_at: None,
    }
}

/// Hydrate form state from a record, as the create dialog would see it
fn unsaved(record: &ProviderRecord) -> PaymentProvider {
    let mut provider = PaymentProvider::from_record(record);
    provider.id = None;
    provider
}

/// Shared-mode provider with the given number and supported currencies
pub fn shared_provider(
    name: &str,
    number: &str,
    currencies: &[CurrencyCode],
    overrides: Vec<CurrencyAccount>,
) -> PaymentProvider {
    unsaved(&record(
        name,
        NumberingMode::Shared,
        Some(number),
        currencies,
        overrides,
    ))
}

/// Per-currency provider with the given rows
pub fn per_currency_provider(name: &str, accounts: Vec<CurrencyAccount>) -> PaymentProvider {
    unsaved(&record(name, NumberingMode::PerCurrency, None, &[], accounts))
}

/// Account row with a number
pub fn account(currency: CurrencyCode, number: &str) -> CurrencyAccount {
    CurrencyAccount::new(currency).with_number(number)
}

// ---------------------------------------------------------------------------
// RecordingNotifier
// ---------------------------------------------------------------------------

/// Signal received by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Validation(&'static str),
    Submitted(SubmitKind),
    Failed,
}

#[derive(Default)]
pub struct RecordingNotifier {
    signals: Mutex<Vec<Signal>>,
}

impl RecordingNotifier {
    pub fn signals(&self) -> Vec<Signal> {
        self.signals.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn validation_failed(&self, error: &ValidationError) {
        self.signals
            .lock()
            .unwrap()
            .push(Signal::Validation(error.message_key()));
    }

    fn submitted(&self, kind: SubmitKind) {
        self.signals.lock().unwrap().push(Signal::Submitted(kind));
    }

    fn submission_failed(&self) {
        self.signals.lock().unwrap().push(Signal::Failed);
    }
}

// ---------------------------------------------------------------------------
// UnreachableBackend
// ---------------------------------------------------------------------------

/// CRUD backend whose every call fails, counting attempts
#[derive(Default)]
pub struct UnreachableBackend {
    pub attempts: Mutex<usize>,
}

impl UnreachableBackend {
    fn fail<T>(&self) -> Result<T> {
        *self.attempts.lock().unwrap() += 1;
        Err(anyhow!("connection refused"))
    }
}

#[async_trait]
impl ProviderCrud for UnreachableBackend {
    async fn create(&self, _payload: ProviderPayload) -> Result<ProviderRecord> {
        self.fail()
    }

    async fn update(&self, _id: &Uuid, _payload: ProviderPayload) -> Result<ProviderRecord> {
        self.fail()
    }

    async fn delete(&self, _id: &Uuid) -> Result<()> {
        self.fail()
    }
}

// ---------------------------------------------------------------------------
// FixedIconPicker
// ---------------------------------------------------------------------------

/// Picker returning a preset selection
pub struct FixedIconPicker(pub Option<IconRef>);

#[async_trait]
impl IconPicker for FixedIconPicker {
    async fn pick(&self) -> Result<Option<IconRef>> {
        Ok(self.0.clone())
    }
}

pub fn bank_icon() -> IconRef {
    IconRef {
        id: "media-42".to_string(),
        url: "https://cdn.example.com/icons/bank.png".to_string(),
        name: "bank.png".to_string(),
    }
}

/// Store + recording notifier wired for a session
pub fn wired() -> (InMemoryProviderStore, Arc<RecordingNotifier>) {
    init_tracing();
    (InMemoryProviderStore::new(), Arc::new(RecordingNotifier::default()))
}
