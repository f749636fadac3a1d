//! Transport payload for create/update calls
//!
//! [`build_payload`] turns form state into the JSON body the backend expects.
//! Account rows are always normalized and rows without an account number are
//! dropped, whatever the numbering mode.

use crate::core::account::CurrencyAccount;
use crate::core::currency::CurrencyCode;
use crate::core::policy::NumberingMode;
use crate::core::provider::{Numbering, PaymentProvider, ProviderType};
use crate::core::validation::filters::{self, trimmed, trimmed_or_none};
use serde::{Deserialize, Serialize};

/// Body of a provider create/update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPayload {
    pub provider_name: String,

    /// Media asset id of the icon; serialized as `null` when unset
    #[serde(default)]
    pub icon_id: Option<String>,

    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    pub numbering_mode: NumberingMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_currencies: Option<Vec<CurrencyCode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<CurrencyAccount>>,

    #[serde(default = "filters::default_true", deserialize_with = "filters::bool_or_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "filters::lenient_integer")]
    pub display_order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Trim and clean account rows, dropping those without an account number
pub fn normalize_accounts(accounts: &[CurrencyAccount]) -> Vec<CurrencyAccount> {
    accounts
        .iter()
        .map(|account| CurrencyAccount {
            id: account.id,
            currency: account.currency,
            account_number: trimmed(&account.account_number),
            is_active: account.is_active,
            display_order: account.display_order,
            notes: trimmed_or_none(account.notes.as_deref()),
        })
        .filter(|account| !account.account_number.is_empty())
        .collect()
}

/// Build the request body for `provider`.
///
/// Callers are expected to run validation first; the builder itself never
/// fails and never emits a blank account row.
pub fn build_payload(provider: &PaymentProvider) -> ProviderPayload {
    let mut payload = ProviderPayload {
        provider_name: trimmed(&provider.provider_name),
        icon_id: provider.icon.as_ref().map(|icon| icon.id.clone()),
        provider_type: provider.provider_type,
        numbering_mode: provider.mode(),
        shared_account_number: None,
        supported_currencies: None,
        accounts: None,
        is_active: provider.is_active,
        display_order: provider.display_order,
        notes: trimmed_or_none(provider.notes.as_deref()),
    };

    match provider.numbering() {
        Numbering::Shared(shared) => {
            let overrides = normalize_accounts(&shared.overrides);
            payload.shared_account_number = Some(trimmed(&shared.shared_account_number));
            payload.supported_currencies =
                Some(shared.supported_currencies.iter().copied().collect());
            payload.accounts = (!overrides.is_empty()).then_some(overrides);
        }
        Numbering::PerCurrency(per) => {
            payload.accounts = Some(normalize_accounts(&per.accounts));
        }
    }

    payload
}

impl ProviderPayload {
    /// Re-apply normalization. A payload from [`build_payload`] is returned
    /// unchanged.
    pub fn normalized(mut self) -> Self {
        self.provider_name = trimmed(&self.provider_name);
        self.notes = trimmed_or_none(self.notes.as_deref());

        let accounts = self.accounts.as_deref().map(normalize_accounts);
        match self.numbering_mode {
            NumberingMode::Shared => {
                self.shared_account_number = Some(trimmed(
                    self.shared_account_number.as_deref().unwrap_or_default(),
                ));
                self.supported_currencies = Some(self.supported_currencies.unwrap_or_default());
                self.accounts = accounts.filter(|a| !a.is_empty());
            }
            NumberingMode::PerCurrency => {
                self.shared_account_number = None;
                self.supported_currencies = None;
                self.accounts = Some(accounts.unwrap_or_default());
            }
        }
        self
    }
}

impl PaymentProvider {
    /// See [`build_payload`]
    pub fn build_payload(&self) -> ProviderPayload {
        build_payload(self)
    }
}
