//! # Local Payments
//!
//! Configuration model for local payment providers (banks and wallets) as
//! edited from an admin settings page.
//!
//! ## Features
//!
//! - **Two numbering modes**: one shared account number for several
//!   currencies, or one account per currency
//! - **Consistent editing**: mode switches, currency toggles and row edits
//!   keep the account list coherent with the active mode
//! - **Fail-fast validation**: the first blocking problem is reported as a
//!   typed error with a translation key
//! - **Normalized payloads**: trimmed fields, no blank account rows
//! - **Backend seams**: async traits for the provider backend, with an
//!   in-memory store and an optional HTTP client (`http` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use local_payments::prelude::*;
//!
//! let mut provider = PaymentProvider::new().with_name("Bank X");
//! provider.set_shared_account_number("12345")?;
//! provider.toggle_supported_currency(CurrencyCode::Sar)?;
//!
//! provider.validate()?;
//! let payload = provider.build_payload();
//! crud.create(payload).await?;
//! ```

#[cfg(feature = "http")]
pub mod client;
pub mod config;
pub mod core;
pub mod session;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Model ===
    pub use crate::core::{
        AccountPatch, CurrencyAccount, CurrencyCode, CurrencySet, IconRef, Numbering,
        NumberingMode, PaymentProvider, PerCurrencyNumbering, ProviderType, SharedNumbering,
    };

    // === Operations ===
    pub use crate::core::{
        available_currencies, build_payload, can_add_account_row, normalize_accounts, validate,
    };

    // === Read models & payloads ===
    pub use crate::core::{GroupedAccount, GroupedProvider, ProviderPayload, ProviderRecord};

    // === Errors ===
    pub use crate::core::{
        ConfigError, EditError, ProviderError, ProviderResult, ValidationError,
    };

    // === Collaborators ===
    pub use crate::core::{
        IconPicker, LogNotifier, Notifier, ProviderCrud, ProviderSource, SubmitKind,
    };
    pub use crate::session::EditSession;
    pub use crate::storage::InMemoryProviderStore;

    #[cfg(feature = "http")]
    pub use crate::client::HttpProviderClient;

    // === Config ===
    pub use crate::config::{ApiConfig, ProviderDefaults, SettingsConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
