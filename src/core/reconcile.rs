//! Mode transitions and supported-currency toggling
//!
//! These are the only operations that move a provider between numbering
//! modes or change the currencies a shared number covers. Both keep the
//! account rows consistent with the resulting mode.

use crate::core::account::CurrencyAccount;
use crate::core::currency::CurrencyCode;
use crate::core::error::EditError;
use crate::core::policy::NumberingMode;
use crate::core::provider::{
    Numbering, PaymentProvider, PerCurrencyNumbering, SharedNumbering, default_currency_set,
};

impl PaymentProvider {
    /// Switch the provider to `mode`.
    ///
    /// Shared to per-currency: existing overrides become the authoritative
    /// rows; with no overrides a single blank row in the default currency is
    /// seeded. Per-currency to shared: rows become overrides, the previous
    /// shared number and supported set come back (the set falls back to
    /// `{YER}` if it was empty). Switching to the current mode does nothing.
    ///
    /// Numbering data cannot be swapped in from outside the crate:
    ///
    /// ```compile_fail
    /// use local_payments::prelude::*;
    ///
    /// let provider = PaymentProvider::new()
    ///     .with_numbering(Numbering::PerCurrency(PerCurrencyNumbering::new(vec![])));
    /// ```
    pub fn set_numbering_mode(&mut self, mode: NumberingMode) {
        if self.mode() == mode {
            return;
        }

        let previous = std::mem::take(&mut self.numbering);
        self.numbering = match previous {
            Numbering::Shared(shared) => {
                let mut accounts = shared.overrides;
                let seeded = accounts.is_empty();
                if seeded {
                    accounts.push(CurrencyAccount::new(CurrencyCode::DEFAULT));
                }
                tracing::debug!(
                    rows = accounts.len(),
                    seeded,
                    "numbering mode changed to per_currency"
                );
                Numbering::PerCurrency(PerCurrencyNumbering {
                    accounts,
                    retained_shared_number: shared.shared_account_number,
                    retained_currencies: shared.supported_currencies,
                })
            }
            Numbering::PerCurrency(per) => {
                let supported_currencies = if per.retained_currencies.is_empty() {
                    default_currency_set()
                } else {
                    per.retained_currencies
                };
                tracing::debug!(
                    overrides = per.accounts.len(),
                    "numbering mode changed to shared"
                );
                Numbering::Shared(SharedNumbering {
                    shared_account_number: per.retained_shared_number,
                    supported_currencies,
                    overrides: per.accounts,
                })
            }
        };
    }

    /// Add `currency` to, or remove it from, the shared supported set.
    ///
    /// Removing prunes any override in that currency. Removing the last
    /// supported currency is refused and leaves the provider untouched.
    pub fn toggle_supported_currency(&mut self, currency: CurrencyCode) -> Result<(), EditError> {
        let Numbering::Shared(shared) = &mut self.numbering else {
            return Err(EditError::WrongMode {
                expected: NumberingMode::Shared,
            });
        };

        if shared.supported_currencies.contains(&currency) {
            if shared.supported_currencies.len() == 1 {
                tracing::debug!(%currency, "refusing to remove last supported currency");
                return Err(EditError::LastSupportedCurrency);
            }
            shared.supported_currencies.shift_remove(&currency);
            let supported = &shared.supported_currencies;
            shared.overrides.retain(|a| supported.contains(&a.currency));
            tracing::debug!(%currency, "supported currency removed");
        } else {
            shared.supported_currencies.insert(currency);
            tracing::debug!(%currency, "supported currency added");
        }
        Ok(())
    }
}
