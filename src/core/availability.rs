//! Currency availability for account rows
//!
//! Decides which currencies a row may still pick. The result drives both the
//! per-row currency dropdown and whether a new row can be added at all.

use crate::core::currency::CurrencyCode;
use crate::core::provider::{Numbering, PaymentProvider};

/// Currencies still assignable on `provider`.
///
/// The pool is the supported set in shared mode and every currency in
/// per-currency mode. Currencies claimed by any row other than
/// `exclude_index` are removed, so a row being edited keeps its own currency
/// selectable.
pub fn available_currencies(
    provider: &PaymentProvider,
    exclude_index: Option<usize>,
) -> Vec<CurrencyCode> {
    let taken: Vec<CurrencyCode> = provider
        .accounts()
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != exclude_index)
        .map(|(_, account)| account.currency)
        .collect();

    let pool: Vec<CurrencyCode> = match provider.numbering() {
        Numbering::Shared(shared) => shared.supported_currencies.iter().copied().collect(),
        Numbering::PerCurrency(_) => CurrencyCode::ALL.to_vec(),
    };

    pool.into_iter().filter(|c| !taken.contains(c)).collect()
}

/// Whether `add_account_row` would append a row
pub fn can_add_account_row(provider: &PaymentProvider) -> bool {
    !available_currencies(provider, None).is_empty()
}

impl PaymentProvider {
    /// See [`available_currencies`]
    pub fn available_currencies(&self, exclude_index: Option<usize>) -> Vec<CurrencyCode> {
        available_currencies(self, exclude_index)
    }
}
