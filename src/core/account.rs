//! Per-currency account rows

use crate::core::currency::CurrencyCode;
use crate::core::validation::filters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single currency's account number on a provider.
///
/// In shared mode these rows are optional overrides of the shared number.
/// In per-currency mode they are the only account numbers the provider has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAccount {
    /// Backend identifier, only present for persisted rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    pub currency: CurrencyCode,

    #[serde(default)]
    pub account_number: String,

    #[serde(default = "filters::default_true", deserialize_with = "filters::bool_or_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "filters::lenient_integer")]
    pub display_order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CurrencyAccount {
    /// A fresh, unsaved row for `currency` with a blank account number
    pub fn new(currency: CurrencyCode) -> Self {
        Self {
            id: None,
            currency,
            account_number: String::new(),
            is_active: true,
            display_order: 0,
            notes: None,
        }
    }

    /// Builder-style helper setting the account number
    pub fn with_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = account_number.into();
        self
    }

    /// True when the account number is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.account_number.trim().is_empty()
    }

    /// Shallow-merge a patch into this row.
    ///
    /// Callers are responsible for checking that a currency change does not
    /// collide with another row; see `PaymentProvider::update_account_row`.
    pub fn apply(&mut self, patch: AccountPatch) {
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(number) = patch.account_number {
            self.account_number = number;
        }
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
        if let Some(order) = patch.display_order {
            self.display_order = order;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Partial update for a [`CurrencyAccount`].
///
/// `None` leaves a field untouched. `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub currency: Option<CurrencyCode>,
    pub account_number: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i64>,
    pub notes: Option<Option<String>>,
}

impl AccountPatch {
    pub fn currency(currency: CurrencyCode) -> Self {
        Self {
            currency: Some(currency),
            ..Default::default()
        }
    }

    pub fn account_number(number: impl Into<String>) -> Self {
        Self {
            account_number: Some(number.into()),
            ..Default::default()
        }
    }
}
