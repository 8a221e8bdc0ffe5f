//! Runtime configuration.

use crate::paypal::{PaypalEnvironment, PaypalSetupOptions, DEFAULT_BUTTON_ID, PAYPAL_SCRIPT_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("store_buffer_size must be greater than zero")]
    ZeroBuffer,
}

/// Settings for a [`CheckoutSystem`](crate::lifecycle::CheckoutSystem).
///
/// Every field is optional in the JSON form; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Hosted PayPal checkout script.
    pub script_url: String,
    pub button_id: String,
    pub environment: PaypalEnvironment,
    /// Pending requests the store actor will queue.
    pub store_buffer_size: usize,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            script_url: PAYPAL_SCRIPT_URL.to_string(),
            button_id: DEFAULT_BUTTON_ID.to_string(),
            environment: PaypalEnvironment::Production,
            store_buffer_size: 32,
        }
    }
}

impl CheckoutConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.store_buffer_size == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(config)
    }

    pub fn setup_options(&self) -> PaypalSetupOptions {
        PaypalSetupOptions {
            button: self.button_id.clone(),
            environment: self.environment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = CheckoutConfig::from_json("{}").unwrap();
        assert_eq!(config, CheckoutConfig::default());
        assert_eq!(config.setup_options(), PaypalSetupOptions::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            CheckoutConfig::from_json(r#"{"environment":"sandbox","store_buffer_size":4}"#).unwrap();
        assert_eq!(config.environment, PaypalEnvironment::Sandbox);
        assert_eq!(config.store_buffer_size, 4);
        assert_eq!(config.button_id, DEFAULT_BUTTON_ID);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CheckoutConfig::from_json(r#"{"store_buffer_size":0}"#),
            Err(ConfigError::ZeroBuffer)
        ));
        assert!(matches!(
            CheckoutConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
