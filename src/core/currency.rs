//! Currency codes accepted by local payment providers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A currency a provider account can be denominated in.
///
/// The set is closed. Declaration order is the order used whenever a
/// "first" currency has to be picked (seeding rows, availability pools).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Yemeni rial
    Yer,
    /// Saudi riyal
    Sar,
    /// US dollar
    Usd,
}

impl CurrencyCode {
    /// Every supported currency, in declaration order
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Yer, CurrencyCode::Sar, CurrencyCode::Usd];

    /// Currency used for freshly seeded rows and blank providers
    pub const DEFAULT: CurrencyCode = CurrencyCode::Yer;

    /// The ISO code as it appears on the wire
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Yer => "YER",
            CurrencyCode::Sar => "SAR",
            CurrencyCode::Usd => "USD",
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.code() == upper)
            .ok_or_else(|| format!("Unknown currency code: {}", s))
    }
}
