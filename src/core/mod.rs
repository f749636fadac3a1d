//! Core module containing the provider configuration model

pub mod account;
pub mod availability;
pub mod currency;
pub mod error;
pub mod payload;
pub mod policy;
pub mod provider;
pub mod reconcile;
pub mod record;
pub mod rows;
pub mod service;
pub mod validation;

pub use account::{AccountPatch, CurrencyAccount};
pub use availability::{available_currencies, can_add_account_row};
pub use currency::CurrencyCode;
pub use error::{ConfigError, EditError, ProviderError, ProviderResult, ValidationError};
pub use payload::{ProviderPayload, build_payload, normalize_accounts};
pub use policy::NumberingMode;
pub use provider::{
    CurrencySet, IconRef, Numbering, PaymentProvider, PerCurrencyNumbering, ProviderType,
    SharedNumbering,
};
pub use record::{GroupedAccount, GroupedProvider, ProviderRecord};
pub use service::{IconPicker, LogNotifier, Notifier, ProviderCrud, ProviderSource, SubmitKind};
pub use validation::validate;
