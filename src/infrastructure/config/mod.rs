//! Configuration loading for the rewards simulator.
//!
//! Supports JSON configuration files for:
//! - Tradable assets and their prices
//! - The firm rewards account and seeded user accounts
//! - Free-share allocation tiers and odds
//! - Server settings

use crate::domain::{
    AllocationPolicy, Asset, FirmAccount, InvalidThresholds, ShareLot, UserAccount,
};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the rewards simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Service name/identifier
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Free-share allocation tiers and odds
    #[serde(default)]
    pub allocation: AllocationPolicy,

    /// Tradable assets
    #[serde(default = "default_assets")]
    pub assets: Vec<Asset>,

    /// Firm rewards account seed
    #[serde(default = "default_firm")]
    pub firm: FirmAccount,

    /// User accounts seed
    #[serde(default = "default_users")]
    pub users: Vec<UserAccount>,
}

fn default_service_name() -> String {
    "Rewards Simulator".to_string()
}

fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new("A", dec!(15), 10),
        Asset::new("B", dec!(20), 20),
        Asset::new("C", dec!(25), 30),
        Asset::new("D", dec!(100), 2),
    ]
}

fn default_firm() -> FirmAccount {
    FirmAccount::new(dec!(1000)).with_shares(vec![
        ShareLot::new("A", 1, dec!(4)),
        ShareLot::new("B", 20, dec!(20)),
        ShareLot::new("C", 30, dec!(25)),
        ShareLot::new("D", 2, dec!(100)),
    ])
}

fn default_users() -> Vec<UserAccount> {
    vec![
        UserAccount::new("1"),
        UserAccount::new("2").with_shares(vec![ShareLot::new("A", 10, dec!(15))]),
    ]
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            server: ServerConfig::default(),
            allocation: AllocationPolicy::default(),
            assets: default_assets(),
            firm: default_firm(),
            users: default_users(),
        }
    }
}

impl RewardsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string. Allocation thresholds are
    /// validated here so a broken tier ladder fails before the server starts.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RewardsConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.allocation.validate()?;
        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid allocation config: {0}")]
    InvalidAllocation(#[from] InvalidThresholds),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_full_defaults() {
        let config = RewardsConfig::from_json("{}").unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.assets.len(), 4);
        assert_eq!(config.firm.money_left, dec!(1000));
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.allocation.min_share_value, dec!(3));
    }

    #[test]
    fn test_partial_config_overrides_only_named_sections() {
        let json = r#"{
            "server": { "port": 9000 },
            "assets": [ { "tickerSymbol": "X", "sharePrice": "7", "quantity": 5 } ]
        }"#;
        let config = RewardsConfig::from_json(json).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.assets[0].ticker_symbol, "X");
        assert_eq!(config.firm.money_left, dec!(1000));
    }

    #[test]
    fn test_misordered_allocation_thresholds_are_rejected() {
        let json = r#"{
            "allocation": { "min_share_value": "50", "mid_low_share_value": "10" }
        }"#;

        assert!(matches!(
            RewardsConfig::from_json(json),
            Err(ConfigError::InvalidAllocation(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            RewardsConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            RewardsConfig::from_file("/nonexistent/rewards.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
