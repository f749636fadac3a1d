//! Account row operations

use crate::core::account::{AccountPatch, CurrencyAccount};
use crate::core::error::EditError;
use crate::core::provider::{Numbering, PaymentProvider};

impl PaymentProvider {
    /// Append a blank row in the first currency still available.
    ///
    /// Returns the index of the new row.
    pub fn add_account_row(&mut self) -> Result<usize, EditError> {
        let Some(currency) = self.available_currencies(None).into_iter().next() else {
            tracing::debug!(mode = %self.mode(), "no currency left for a new account row");
            return Err(EditError::NoCurrencyAvailable);
        };

        let accounts = self.numbering.accounts_mut();
        accounts.push(CurrencyAccount::new(currency));
        tracing::debug!(%currency, rows = accounts.len(), "account row added");
        Ok(accounts.len() - 1)
    }

    /// Shallow-merge `patch` into the row at `index`.
    ///
    /// A currency change that would collide with another row, or that names a
    /// currency the shared number does not cover, is refused and the row is
    /// left as it was.
    pub fn update_account_row(
        &mut self,
        index: usize,
        patch: AccountPatch,
    ) -> Result<(), EditError> {
        let current = self
            .accounts()
            .get(index)
            .ok_or(EditError::RowOutOfRange { index })?
            .currency;

        if let Some(currency) = patch.currency.filter(|c| *c != current) {
            let taken = self
                .accounts()
                .iter()
                .enumerate()
                .any(|(i, a)| i != index && a.currency == currency);
            if taken {
                return Err(EditError::CurrencyTaken { currency });
            }
            if let Numbering::Shared(shared) = &self.numbering {
                if !shared.supported_currencies.contains(&currency) {
                    return Err(EditError::CurrencyNotSupported { currency });
                }
            }
        }

        if let Some(row) = self.numbering.accounts_mut().get_mut(index) {
            row.apply(patch);
        }
        Ok(())
    }

    /// Remove the row at `index` and hand it back.
    ///
    /// A per-currency provider always keeps at least one row.
    pub fn remove_account_row(&mut self, index: usize) -> Result<CurrencyAccount, EditError> {
        let len = self.accounts().len();
        if index >= len {
            return Err(EditError::RowOutOfRange { index });
        }
        if self.mode().is_per_currency() && len == 1 {
            return Err(EditError::LastAccountRow);
        }

        let removed = self.numbering.accounts_mut().remove(index);
        tracing::debug!(currency = %removed.currency, "account row removed");
        Ok(removed)
    }

    /// Whether `remove_account_row(index)` would succeed
    pub fn can_remove_account_row(&self, index: usize) -> bool {
        let len = self.accounts().len();
        index < len && !(self.mode().is_per_currency() && len == 1)
    }
}
