//! Numbering mode policy
//!
//! A provider either publishes one account number for several currencies
//! (`shared`) or one account per currency (`per_currency`). Everything else
//! in the crate asks this module which rules apply instead of matching on
//! field contents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a provider's account numbers are organised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingMode {
    /// One shared account number, optional per-currency overrides
    #[default]
    Shared,
    /// One account row per currency, no shared number
    PerCurrency,
}

/// Payload fields that carry the provider's account numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoritativeField {
    SharedAccountNumber,
    SupportedCurrencies,
    Accounts,
}

impl NumberingMode {
    pub fn is_shared(&self) -> bool {
        matches!(self, NumberingMode::Shared)
    }

    pub fn is_per_currency(&self) -> bool {
        matches!(self, NumberingMode::PerCurrency)
    }

    /// Fields that persistence reads for this mode.
    ///
    /// In shared mode `Accounts` is listed last because the overrides are
    /// optional and only sent when at least one survives normalization.
    pub fn authoritative_fields(&self) -> &'static [AuthoritativeField] {
        match self {
            NumberingMode::Shared => &[
                AuthoritativeField::SharedAccountNumber,
                AuthoritativeField::SupportedCurrencies,
                AuthoritativeField::Accounts,
            ],
            NumberingMode::PerCurrency => &[AuthoritativeField::Accounts],
        }
    }

    /// Whether account rows are optional overrides rather than required data
    pub fn accounts_are_overrides(&self) -> bool {
        self.is_shared()
    }

    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingMode::Shared => "shared",
            NumberingMode::PerCurrency => "per_currency",
        }
    }
}

impl fmt::Display for NumberingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
