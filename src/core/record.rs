//! Read models returned by the provider backend
//!
//! The backend exposes two views: raw [`ProviderRecord`]s, used to hydrate
//! the edit dialog, and [`GroupedProvider`]s with the accounts flattened to
//! one row per currency, used by listings.

use crate::core::account::CurrencyAccount;
use crate::core::currency::CurrencyCode;
use crate::core::payload::ProviderPayload;
use crate::core::policy::NumberingMode;
use crate::core::provider::{
    CurrencySet, IconRef, Numbering, PaymentProvider, PerCurrencyNumbering, ProviderType,
    SharedNumbering, default_currency_set,
};
use crate::core::validation::filters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A provider as persisted by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    pub id: Uuid,

    pub provider_name: String,

    /// Expanded icon reference, when the backend resolves it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,

    #[serde(default)]
    pub icon_id: Option<String>,

    #[serde(rename = "type", default)]
    pub provider_type: ProviderType,

    #[serde(default)]
    pub numbering_mode: NumberingMode,

    #[serde(default)]
    pub shared_account_number: Option<String>,

    #[serde(default)]
    pub supported_currencies: Vec<CurrencyCode>,

    #[serde(default)]
    pub accounts: Vec<CurrencyAccount>,

    #[serde(default = "filters::default_true", deserialize_with = "filters::bool_or_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "filters::lenient_integer")]
    pub display_order: i64,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProviderRecord {
    /// Materialize a stored record from a request body.
    ///
    /// Rows without an id get a fresh one, as a backend would assign.
    pub fn from_payload(id: Uuid, payload: ProviderPayload, now: DateTime<Utc>) -> Self {
        let accounts = payload
            .accounts
            .unwrap_or_default()
            .into_iter()
            .map(|mut account| {
                account.id.get_or_insert_with(Uuid::new_v4);
                account
            })
            .collect();

        Self {
            id,
            provider_name: payload.provider_name,
            icon: None,
            icon_id: payload.icon_id,
            provider_type: payload.provider_type,
            numbering_mode: payload.numbering_mode,
            shared_account_number: payload.shared_account_number,
            supported_currencies: payload.supported_currencies.unwrap_or_default(),
            accounts,
            is_active: payload.is_active,
            display_order: payload.display_order,
            notes: payload.notes,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Apply an update body, keeping identity and creation time
    pub fn updated_with(&self, payload: ProviderPayload, now: DateTime<Utc>) -> Self {
        let mut next = Self::from_payload(self.id, payload, now);
        next.created_at = self.created_at;
        if next.icon_id == self.icon_id {
            next.icon = self.icon.clone();
        }
        next
    }

    fn icon_ref(&self) -> Option<IconRef> {
        self.icon
            .clone()
            .or_else(|| self.icon_id.clone().map(IconRef::unresolved))
    }
}

impl IconRef {
    /// A reference known only by id; url and name are resolved by the media
    /// subsystem on demand
    pub fn unresolved(id: String) -> Self {
        Self {
            id,
            url: String::new(),
            name: String::new(),
        }
    }
}

impl PaymentProvider {
    /// Hydrate form state for the edit dialog.
    ///
    /// A shared record with no supported currencies falls back to `{YER}` so
    /// the form never starts with an empty set.
    pub fn from_record(record: &ProviderRecord) -> Self {
        let supported: CurrencySet = record.supported_currencies.iter().copied().collect();
        let shared_number = record.shared_account_number.clone().unwrap_or_default();

        let numbering = match record.numbering_mode {
            NumberingMode::Shared => Numbering::Shared(SharedNumbering {
                shared_account_number: shared_number,
                supported_currencies: if supported.is_empty() {
                    default_currency_set()
                } else {
                    supported
                },
                overrides: record.accounts.clone(),
            }),
            NumberingMode::PerCurrency => Numbering::PerCurrency(PerCurrencyNumbering {
                accounts: record.accounts.clone(),
                retained_shared_number: shared_number,
                retained_currencies: supported,
            }),
        };

        Self {
            id: Some(record.id),
            provider_name: record.provider_name.clone(),
            icon: record.icon_ref(),
            provider_type: record.provider_type,
            is_active: record.is_active,
            display_order: record.display_order,
            notes: record.notes.clone(),
            numbering,
        }
    }
}

/// One currency line of a grouped provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAccount {
    pub currency: CurrencyCode,
    pub account_number: String,
    pub is_active: bool,
    /// True when the number comes from a shared-mode override
    pub is_override: bool,
}

/// Listing view: one entry per provider, accounts flattened per currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedProvider {
    pub id: Uuid,
    pub provider_name: String,
    #[serde(default)]
    pub icon: Option<IconRef>,
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    pub numbering_mode: NumberingMode,
    pub is_active: bool,
    pub display_order: i64,
    pub accounts: Vec<GroupedAccount>,
}

impl GroupedProvider {
    /// Flatten a record.
    ///
    /// Shared providers list every supported currency, using the override
    /// number where one exists. Per-currency providers list their rows.
    /// Blank numbers are never listed.
    pub fn from_record(record: &ProviderRecord) -> Self {
        let accounts = match record.numbering_mode {
            NumberingMode::Shared => {
                let shared = record
                    .shared_account_number
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default();
                record
                    .supported_currencies
                    .iter()
                    .filter_map(|currency| {
                        let row = record
                            .accounts
                            .iter()
                            .find(|a| a.currency == *currency && !a.is_blank());
                        match row {
                            Some(row) => Some(GroupedAccount {
                                currency: *currency,
                                account_number: row.account_number.trim().to_string(),
                                is_active: row.is_active,
                                is_override: true,
                            }),
                            None if !shared.is_empty() => Some(GroupedAccount {
                                currency: *currency,
                                account_number: shared.to_string(),
                                is_active: true,
                                is_override: false,
                            }),
                            None => None,
                        }
                    })
                    .collect()
            }
            NumberingMode::PerCurrency => record
                .accounts
                .iter()
                .filter(|a| !a.is_blank())
                .map(|a| GroupedAccount {
                    currency: a.currency,
                    account_number: a.account_number.trim().to_string(),
                    is_active: a.is_active,
                    is_override: false,
                })
                .collect(),
        };

        Self {
            id: record.id,
            provider_name: record.provider_name.clone(),
            icon: record.icon_ref(),
            provider_type: record.provider_type,
            numbering_mode: record.numbering_mode,
            is_active: record.is_active,
            display_order: record.display_order,
            accounts,
        }
    }
}
