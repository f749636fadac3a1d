//! Typed error handling for provider configuration
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a provider is not ready to be submitted
//! - [`EditError`]: an editing operation was refused, state left unchanged
//! - [`ConfigError`]: configuration could not be loaded
//! - [`ProviderError::Backend`]: the CRUD backend failed
//!
//! Validation errors never carry user-facing text for display. They expose a
//! [`ValidationError::message_key`] that the notification layer resolves.
//!
//! # Example
//!
//! ```rust,ignore
//! use local_payments::prelude::*;
//!
//! match provider.validate() {
//!     Ok(()) => {}
//!     Err(ValidationError::MissingSharedAccountNumber) => focus("sharedAccountNumber"),
//!     Err(e) => notifier.validation_failed(&e),
//! }
//! ```

use crate::core::currency::CurrencyCode;
use crate::core::policy::NumberingMode;
use std::fmt;
use uuid::Uuid;

/// The main error type of the crate
#[derive(Debug)]
pub enum ProviderError {
    /// Provider failed pre-submission checks
    Validation(ValidationError),

    /// An edit was refused
    Edit(EditError),

    /// Configuration errors
    Config(ConfigError),

    /// No provider with this id exists in the backend
    NotFound { id: Uuid },

    /// The operation needs a provider the backend already knows
    NotSaved,

    /// The CRUD backend failed or was unreachable
    Backend { operation: String, message: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Validation(e) => write!(f, "{}", e),
            ProviderError::Edit(e) => write!(f, "{}", e),
            ProviderError::Config(e) => write!(f, "{}", e),
            ProviderError::NotFound { id } => write!(f, "Provider with id '{}' not found", id),
            ProviderError::NotSaved => write!(f, "Provider has not been saved yet"),
            ProviderError::Backend { operation, message } => {
                write!(f, "Provider {} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Validation(e) => Some(e),
            ProviderError::Edit(e) => Some(e),
            ProviderError::Config(e) => Some(e),
            ProviderError::NotFound { .. }
            | ProviderError::NotSaved
            | ProviderError::Backend { .. } => None,
        }
    }
}

impl ProviderError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Validation(e) => e.error_code(),
            ProviderError::Edit(_) => "EDIT_REJECTED",
            ProviderError::Config(_) => "CONFIG_ERROR",
            ProviderError::NotFound { .. } => "PROVIDER_NOT_FOUND",
            ProviderError::NotSaved => "PROVIDER_NOT_SAVED",
            ProviderError::Backend { .. } => "BACKEND_ERROR",
        }
    }

    /// Wrap a collaborator failure
    pub fn backend(operation: impl Into<String>, err: impl fmt::Display) -> Self {
        ProviderError::Backend {
            operation: operation.into(),
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Reasons a provider cannot be submitted yet.
///
/// Checks run in a fixed order and only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Provider name is blank
    MissingProviderName,

    /// Shared mode without a shared account number
    MissingSharedAccountNumber,

    /// Shared mode without any supported currency
    MissingSupportedCurrencies,

    /// Per-currency mode without any account row
    MissingCurrencyAccounts,

    /// Per-currency mode with a row whose account number is blank
    MissingAccountNumber { currency: CurrencyCode },

    /// Two account rows use the same currency
    DuplicateCurrency { currency: CurrencyCode },

    /// Shared-mode override for a currency outside the supported set
    UnsupportedOverrideCurrency { currency: CurrencyCode },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingProviderName => write!(f, "Provider name is required"),
            ValidationError::MissingSharedAccountNumber => {
                write!(f, "Shared account number is required")
            }
            ValidationError::MissingSupportedCurrencies => {
                write!(f, "At least one supported currency is required")
            }
            ValidationError::MissingCurrencyAccounts => {
                write!(f, "At least one currency account is required")
            }
            ValidationError::MissingAccountNumber { currency } => {
                write!(f, "Account number for {} is required", currency)
            }
            ValidationError::DuplicateCurrency { currency } => {
                write!(f, "Currency {} is used by more than one account", currency)
            }
            ValidationError::UnsupportedOverrideCurrency { currency } => {
                write!(f, "Override currency {} is not a supported currency", currency)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingProviderName => "MISSING_PROVIDER_NAME",
            ValidationError::MissingSharedAccountNumber => "MISSING_SHARED_ACCOUNT_NUMBER",
            ValidationError::MissingSupportedCurrencies => "MISSING_SUPPORTED_CURRENCIES",
            ValidationError::MissingCurrencyAccounts => "MISSING_CURRENCY_ACCOUNTS",
            ValidationError::MissingAccountNumber { .. } => "MISSING_ACCOUNT_NUMBER",
            ValidationError::DuplicateCurrency { .. } => "DUPLICATE_CURRENCY",
            ValidationError::UnsupportedOverrideCurrency { .. } => "UNSUPPORTED_OVERRIDE_CURRENCY",
        }
    }

    /// Translation key the notification layer resolves to user-facing text
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingProviderName => {
                "settings.providers.errors.missing_provider_name"
            }
            ValidationError::MissingSharedAccountNumber => {
                "settings.providers.errors.missing_shared_account_number"
            }
            ValidationError::MissingSupportedCurrencies => {
                "settings.providers.errors.missing_supported_currencies"
            }
            ValidationError::MissingCurrencyAccounts => {
                "settings.providers.errors.missing_currency_accounts"
            }
            ValidationError::MissingAccountNumber { .. } => {
                "settings.providers.errors.missing_account_number"
            }
            ValidationError::DuplicateCurrency { .. } => {
                "settings.providers.errors.duplicate_currency"
            }
            ValidationError::UnsupportedOverrideCurrency { .. } => {
                "settings.providers.errors.unsupported_override_currency"
            }
        }
    }
}

impl From<ValidationError> for ProviderError {
    fn from(err: ValidationError) -> Self {
        ProviderError::Validation(err)
    }
}

// =============================================================================
// Edit Errors
// =============================================================================

/// An editing operation that was refused. The provider is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("operation requires {expected} numbering mode")]
    WrongMode { expected: NumberingMode },

    #[error("at least one supported currency must remain selected")]
    LastSupportedCurrency,

    #[error("no currency left for a new account row")]
    NoCurrencyAvailable,

    #[error("account row {index} does not exist")]
    RowOutOfRange { index: usize },

    #[error("currency {currency} is already used by another account row")]
    CurrencyTaken { currency: CurrencyCode },

    #[error("currency {currency} is not supported by this provider")]
    CurrencyNotSupported { currency: CurrencyCode },

    #[error("a per-currency provider needs at least one account row")]
    LastAccountRow,
}

impl From<EditError> for ProviderError {
    fn from(err: EditError) -> Self {
        ProviderError::Edit(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue { field: String, message: String },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid value for field '{}': {}", field, message)
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ProviderError {
    fn from(err: ConfigError) -> Self {
        ProviderError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(err: validator::ValidationErrors) -> Self {
        let field = err
            .errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_default();
        ConfigError::InvalidValue {
            field,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

// =============================================================================
// Tests
// =============================================================================
