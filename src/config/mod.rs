//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::provider::{PaymentProvider, ProviderType};
use crate::core::validation::filters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

fn default_providers_path() -> String {
    "/local-payment-providers".to_string()
}

fn default_grouped_path() -> String {
    "/local-payment-providers/grouped".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Where the provider backend lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Base URL of the admin REST API (e.g. "https://shop.example.com/api")
    #[validate(url)]
    pub base_url: String,

    /// Collection path for raw provider records
    #[serde(default = "default_providers_path")]
    pub providers_path: String,

    /// Path of the grouped listing view
    #[serde(default = "default_grouped_path")]
    pub grouped_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 600))]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// URL of the provider collection
    pub fn providers_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.providers_path)
    }

    /// URL of a single provider
    pub fn provider_url(&self, id: &Uuid) -> String {
        format!("{}/{}", self.providers_url(), id)
    }

    /// URL of the grouped listing
    pub fn grouped_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.grouped_path)
    }
}

/// Field values a blank provider starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDefaults {
    #[serde(default = "filters::default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub provider_type: ProviderType,
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self {
            is_active: true,
            provider_type: ProviderType::default(),
        }
    }
}

impl ProviderDefaults {
    /// Blank provider for the "create" dialog
    pub fn new_provider(&self) -> PaymentProvider {
        let mut provider = PaymentProvider::new();
        provider.is_active = self.is_active;
        provider.provider_type = self.provider_type;
        provider
    }
}

/// Complete configuration for the provider settings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SettingsConfig {
    #[validate(nested)]
    pub api: ApiConfig,

    #[serde(default)]
    pub defaults: ProviderDefaults,
}

impl SettingsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => e.into(),
        })?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                file: Some(path.to_string()),
                message,
            },
            other => other,
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                providers_path: default_providers_path(),
                grouped_path: default_grouped_path(),
                timeout_secs: default_timeout_secs(),
            },
            defaults: ProviderDefaults::default(),
        }
    }
}
