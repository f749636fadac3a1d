//! Provider form state
//!
//! [`PaymentProvider`] is the aggregate a settings dialog edits. Mode-specific
//! data lives in the [`Numbering`] variant so that a shared provider cannot
//! carry a dangling per-currency list and vice versa. Only the reconciler
//! (`set_numbering_mode`) converts between the two variants once a provider
//! exists.

use crate::core::account::CurrencyAccount;
use crate::core::currency::CurrencyCode;
use crate::core::error::EditError;
use crate::core::policy::NumberingMode;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered set of currencies; insertion order is kept for payload output
pub type CurrencySet = IndexSet<CurrencyCode>;

/// The single-element set a blank or reset shared provider starts with
pub fn default_currency_set() -> CurrencySet {
    IndexSet::from([CurrencyCode::DEFAULT])
}

/// Kind of payment method a provider represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    #[default]
    Bank,
    Wallet,
}

/// Weak reference to an asset owned by the media subsystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    pub id: String,
    pub url: String,
    pub name: String,
}

/// Shared-mode data: one number for all supported currencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedNumbering {
    pub shared_account_number: String,
    pub supported_currencies: CurrencySet,
    /// Optional per-currency overrides of the shared number
    pub overrides: Vec<CurrencyAccount>,
}

impl Default for SharedNumbering {
    fn default() -> Self {
        Self {
            shared_account_number: String::new(),
            supported_currencies: default_currency_set(),
            overrides: Vec::new(),
        }
    }
}

/// Per-currency data: the account rows are the sole source of truth
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerCurrencyNumbering {
    pub accounts: Vec<CurrencyAccount>,
    /// Shared number kept while in per-currency mode, restored on switch back
    pub(crate) retained_shared_number: String,
    pub(crate) retained_currencies: CurrencySet,
}

impl PerCurrencyNumbering {
    pub fn new(accounts: Vec<CurrencyAccount>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }
}

/// Mode-tagged account data of a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numbering {
    Shared(SharedNumbering),
    PerCurrency(PerCurrencyNumbering),
}

impl Numbering {
    pub fn mode(&self) -> NumberingMode {
        match self {
            Numbering::Shared(_) => NumberingMode::Shared,
            Numbering::PerCurrency(_) => NumberingMode::PerCurrency,
        }
    }

    /// Account rows: overrides in shared mode, the full list otherwise
    pub fn accounts(&self) -> &[CurrencyAccount] {
        match self {
            Numbering::Shared(shared) => &shared.overrides,
            Numbering::PerCurrency(per) => &per.accounts,
        }
    }

    pub(crate) fn accounts_mut(&mut self) -> &mut Vec<CurrencyAccount> {
        match self {
            Numbering::Shared(shared) => &mut shared.overrides,
            Numbering::PerCurrency(per) => &mut per.accounts,
        }
    }
}

impl Default for Numbering {
    fn default() -> Self {
        Numbering::Shared(SharedNumbering::default())
    }
}

/// Editable state of one payment provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentProvider {
    /// Backend identifier; `None` while creating
    pub id: Option<Uuid>,
    pub provider_name: String,
    pub icon: Option<IconRef>,
    pub provider_type: ProviderType,
    pub is_active: bool,
    pub display_order: i64,
    pub notes: Option<String>,
    pub(crate) numbering: Numbering,
}

impl Default for PaymentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentProvider {
    /// Blank provider for the "create" dialog: shared mode, `{YER}`, no rows
    pub fn new() -> Self {
        Self {
            id: None,
            provider_name: String::new(),
            icon: None,
            provider_type: ProviderType::default(),
            is_active: true,
            display_order: 0,
            notes: None,
            numbering: Numbering::default(),
        }
    }

    /// Unit-test fixture around raw numbering data. Outside this crate a
    /// provider's mode changes through `set_numbering_mode` only.
    #[cfg(test)]
    pub(crate) fn with_numbering(mut self, numbering: Numbering) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    pub fn mode(&self) -> NumberingMode {
        self.numbering.mode()
    }

    pub fn accounts(&self) -> &[CurrencyAccount] {
        self.numbering.accounts()
    }

    /// The shared number, or `None` outside shared mode
    pub fn shared_account_number(&self) -> Option<&str> {
        match &self.numbering {
            Numbering::Shared(shared) => Some(&shared.shared_account_number),
            Numbering::PerCurrency(_) => None,
        }
    }

    /// The supported set, or `None` outside shared mode
    pub fn supported_currencies(&self) -> Option<&CurrencySet> {
        match &self.numbering {
            Numbering::Shared(shared) => Some(&shared.supported_currencies),
            Numbering::PerCurrency(_) => None,
        }
    }

    /// Edit the shared account number
    pub fn set_shared_account_number(
        &mut self,
        number: impl Into<String>,
    ) -> Result<(), EditError> {
        match &mut self.numbering {
            Numbering::Shared(shared) => {
                shared.shared_account_number = number.into();
                Ok(())
            }
            Numbering::PerCurrency(_) => Err(EditError::WrongMode {
                expected: NumberingMode::Shared,
            }),
        }
    }

    /// Store the reference returned by the media picker
    pub fn set_icon(&mut self, icon: IconRef) {
        self.icon = Some(icon);
    }

    pub fn clear_icon(&mut self) {
        self.icon = None;
    }

    /// The number a payer should use for `currency`, if the provider takes it.
    ///
    /// Shared providers answer with the override for that currency when one
    /// has a number, otherwise with the shared number. Per-currency
    /// providers answer only from their rows.
    pub fn effective_account_number(&self, currency: CurrencyCode) -> Option<&str> {
        let row = self
            .accounts()
            .iter()
            .find(|a| a.currency == currency && !a.is_blank())
            .map(|a| a.account_number.trim());

        match &self.numbering {
            Numbering::Shared(shared) => {
                if !shared.supported_currencies.contains(&currency) {
                    return None;
                }
                row.or_else(|| {
                    let number = shared.shared_account_number.trim();
                    (!number.is_empty()).then_some(number)
                })
            }
            Numbering::PerCurrency(_) => row,
        }
    }
}
