//! Reusable field validators
//!
//! Each validator checks one property and reports the violation it was built
//! with. The validation engine chains them in a fixed order.

use crate::core::account::CurrencyAccount;
use crate::core::error::ValidationError;
use crate::core::provider::CurrencySet;
use indexmap::IndexSet;

/// Validator: text must contain something besides whitespace
pub fn required_text(
    error: ValidationError,
) -> impl Fn(&str) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |value: &str| {
        if value.trim().is_empty() {
            Err(error.clone())
        } else {
            Ok(())
        }
    }
}

/// Validator: collection must have at least one element
pub fn non_empty(
    error: ValidationError,
) -> impl Fn(usize) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |len: usize| if len == 0 { Err(error.clone()) } else { Ok(()) }
}

/// Validator: every account row has a non-blank number
pub fn account_numbers_present(accounts: &[CurrencyAccount]) -> Result<(), ValidationError> {
    match accounts.iter().find(|a| a.is_blank()) {
        Some(account) => Err(ValidationError::MissingAccountNumber {
            currency: account.currency,
        }),
        None => Ok(()),
    }
}

/// Validator: no currency appears on two rows
pub fn unique_currencies(accounts: &[CurrencyAccount]) -> Result<(), ValidationError> {
    let mut seen = IndexSet::with_capacity(accounts.len());
    for account in accounts {
        if !seen.insert(account.currency) {
            return Err(ValidationError::DuplicateCurrency {
                currency: account.currency,
            });
        }
    }
    Ok(())
}

/// Validator: every override currency is in the supported set
pub fn overrides_supported(
    overrides: &[CurrencyAccount],
    supported: &CurrencySet,
) -> Result<(), ValidationError> {
    match overrides.iter().find(|a| !supported.contains(&a.currency)) {
        Some(account) => Err(ValidationError::UnsupportedOverrideCurrency {
            currency: account.currency,
        }),
        None => Ok(()),
    }
}
