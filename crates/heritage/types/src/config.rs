//! Registry configuration
//!
//! Construction-time settings: the initial escrow threshold and the labels
//! used for the genesis campaign, certificate and token.

use crate::{Amount, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// Labels and terms for the records seeded at construction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    pub campaign_name: String,
    pub content_id: String,
    pub certificate_name: String,
    pub certificate_quantity: u64,
    pub certificate_price: Amount,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            campaign_name: "Genesis Campaign".to_string(),
            content_id: String::new(),
            certificate_name: "Genesis Certificate".to_string(),
            certificate_quantity: 0,
            certificate_price: Amount::zero(),
        }
    }
}

/// Configuration for a new registry
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Escrow threshold in force at construction
    pub initial_escrow: Amount,
    pub genesis: GenesisConfig,
}

impl RegistryConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let config: RegistryConfig =
            serde_json::from_str(json).map_err(|e| RegistryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_initial_escrow(mut self, amount: impl Into<Amount>) -> Self {
        self.initial_escrow = amount.into();
        self
    }

    pub fn validate(&self) -> RegistryResult<()> {
        if self.genesis.campaign_name.trim().is_empty() {
            return Err(RegistryError::Config(
                "genesis campaign name must not be empty".into(),
            ));
        }
        if self.genesis.certificate_name.trim().is_empty() {
            return Err(RegistryError::Config(
                "genesis certificate name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert!(config.initial_escrow.is_zero());
        assert_eq!(config.genesis.campaign_name, "Genesis Campaign");
        assert_eq!(config.genesis.certificate_name, "Genesis Certificate");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = RegistryConfig::from_json(r#"{"initial_escrow": 10000}"#).unwrap();
        assert_eq!(config.initial_escrow, Amount::new(10_000));
        assert_eq!(config.genesis, GenesisConfig::default());
    }

    #[test]
    fn test_rejects_blank_genesis_name() {
        let result = RegistryConfig::from_json(r#"{"genesis": {"campaign_name": "  "}}"#);
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            RegistryConfig::from_json("{not json"),
            Err(RegistryError::Config(_))
        ));
    }
}
