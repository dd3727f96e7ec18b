//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::PathBuf;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
    pub seed: SeedConfig,
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one snapshot file per collection
    pub data_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Enables the rolling file writer when set
    pub directory: Option<PathBuf>,
    pub file_name: String,
    pub json: bool,
}

/// Ticket prices and identifier sequences used by the booking workflow
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BookingConfig {
    pub standard_price: Decimal,
    pub vip_price: Decimal,
    pub weekend_price: Decimal,
    pub customer_id_base: i64,
    pub booking_id_base: i64,
    pub payment_id_base: i64,
}

/// Default data written on first run
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub admin_email: String,
    pub admin_password: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("GRANDPRIX").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::GrandPrixError> {
        super::validation::validate_settings(self)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_name: "grandprix.log".to_string(),
            json: false,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            standard_price: Decimal::from(100),
            vip_price: Decimal::from(250),
            weekend_price: Decimal::from(400),
            customer_id_base: 100,
            booking_id_base: 1001,
            payment_id_base: 2001,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            admin_email: "admin@zu.ac.ae".to_string(),
            admin_password: "111222333444555".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_price_list() {
        let settings = Settings::default();
        assert_eq!(settings.booking.standard_price, Decimal::from(100));
        assert_eq!(settings.booking.vip_price, Decimal::from(250));
        assert_eq!(settings.booking.weekend_price, Decimal::from(400));
        assert_eq!(settings.storage.data_dir, PathBuf::from("data"));
        assert!(settings.seed.enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[storage]\ndata_dir = \"/tmp/grandprix\"\n\n[booking]\nvip_price = 300\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.storage.data_dir, PathBuf::from("/tmp/grandprix"));
        assert_eq!(settings.booking.vip_price, Decimal::from(300));
        assert_eq!(settings.booking.standard_price, Decimal::from(100));
        assert_eq!(settings.logging.level, "info");
    }
}
