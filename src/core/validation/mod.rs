//! Pre-submission validation
//!
//! [`validate`] is fail-fast: it returns the first violation found, checking
//! the provider name, then the mode-specific requirements, then the account
//! list as a whole. Nothing here talks to the notification layer; callers
//! decide how to surface the error.

pub mod filters;
pub mod validators;

use crate::core::error::ValidationError;
use crate::core::provider::{Numbering, PaymentProvider};
use validators::{
    account_numbers_present, non_empty, overrides_supported, required_text, unique_currencies,
};

/// Check that `provider` can be submitted
pub fn validate(provider: &PaymentProvider) -> Result<(), ValidationError> {
    required_text(ValidationError::MissingProviderName)(provider.provider_name.as_str())?;

    match provider.numbering() {
        Numbering::Shared(shared) => {
            required_text(ValidationError::MissingSharedAccountNumber)(
                shared.shared_account_number.as_str(),
            )?;
            non_empty(ValidationError::MissingSupportedCurrencies)(
                shared.supported_currencies.len(),
            )?;
        }
        Numbering::PerCurrency(per) => {
            non_empty(ValidationError::MissingCurrencyAccounts)(per.accounts.len())?;
            account_numbers_present(&per.accounts)?;
        }
    }

    unique_currencies(provider.accounts())?;

    if let Numbering::Shared(shared) = provider.numbering() {
        overrides_supported(&shared.overrides, &shared.supported_currencies)?;
    }

    Ok(())
}

impl PaymentProvider {
    /// See [`validate`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::CurrencyAccount;
    use crate::core::currency::CurrencyCode;
    use crate::core::provider::{PerCurrencyNumbering, SharedNumbering};
    use indexmap::IndexSet;

    fn shared(number: &str, currencies: &[CurrencyCode]) -> PaymentProvider {
        PaymentProvider::new()
            .with_name("Bank X")
            .with_numbering(Numbering::Shared(SharedNumbering {
                shared_account_number: number.to_string(),
                supported_currencies: currencies.iter().copied().collect(),
                overrides: vec![],
            }))
    }

    fn per_currency(accounts: Vec<CurrencyAccount>) -> PaymentProvider {
        PaymentProvider::new()
            .with_name("Wallet Y")
            .with_numbering(Numbering::PerCurrency(PerCurrencyNumbering::new(accounts)))
    }

    #[test]
    fn test_valid_shared_provider() {
        assert!(validate(&shared("12345", &[CurrencyCode::Yer, CurrencyCode::Sar])).is_ok());
    }

    #[test]
    fn test_missing_name_is_reported_first() {
        let provider = shared("", &[]).with_name("  ");
        assert_eq!(validate(&provider), Err(ValidationError::MissingProviderName));
    }

    #[test]
    fn test_missing_shared_number() {
        let provider = shared(" ", &[CurrencyCode::Yer]);
        assert_eq!(
            validate(&provider),
            Err(ValidationError::MissingSharedAccountNumber)
        );
    }

    #[test]
    fn test_missing_supported_currencies() {
        let provider = shared("1", &[]);
        assert_eq!(
            validate(&provider),
            Err(ValidationError::MissingSupportedCurrencies)
        );
    }

    #[test]
    fn test_missing_currency_accounts() {
        assert_eq!(
            validate(&per_currency(vec![])),
            Err(ValidationError::MissingCurrencyAccounts)
        );
    }

    #[test]
    fn test_blank_per_currency_row() {
        let provider = per_currency(vec![CurrencyAccount::new(CurrencyCode::Yer)]);
        assert!(matches!(
            validate(&provider),
            Err(ValidationError::MissingAccountNumber { .. })
        ));
    }

    #[test]
    fn test_blank_override_does_not_block_shared() {
        let mut provider = shared("1", &[CurrencyCode::Yer]);
        provider.add_account_row().unwrap();
        assert!(validate(&provider).is_ok());
    }

    #[test]
    fn test_duplicate_currency_from_hydrated_rows() {
        let provider = per_currency(vec![
            CurrencyAccount::new(CurrencyCode::Yer).with_number("1"),
            CurrencyAccount::new(CurrencyCode::Yer).with_number("2"),
        ]);
        assert_eq!(
            validate(&provider),
            Err(ValidationError::DuplicateCurrency {
                currency: CurrencyCode::Yer
            })
        );
    }

    #[test]
    fn test_override_outside_supported_set() {
        let provider = PaymentProvider::new()
            .with_name("Bank X")
            .with_numbering(Numbering::Shared(SharedNumbering {
                shared_account_number: "1".to_string(),
                supported_currencies: IndexSet::from([CurrencyCode::Yer]),
                overrides: vec![CurrencyAccount::new(CurrencyCode::Usd).with_number("2")],
            }));
        assert_eq!(
            provider.validate(),
            Err(ValidationError::UnsupportedOverrideCurrency {
                currency: CurrencyCode::Usd
            })
        );
    }
}
