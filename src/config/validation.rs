//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use rust_decimal::Decimal;
use crate::utils::errors::{GrandPrixError, Result};
use crate::utils::helpers::is_valid_email;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    validate_booking_config(&settings.booking)?;
    validate_seed_config(&settings.seed)?;

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(GrandPrixError::Config(
            "Storage data directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(GrandPrixError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(GrandPrixError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_name.is_empty() {
        return Err(GrandPrixError::Config(
            "Log file name is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}

/// Validate booking configuration
fn validate_booking_config(config: &super::BookingConfig) -> Result<()> {
    let prices = [
        ("standard", config.standard_price),
        ("vip", config.vip_price),
        ("weekend", config.weekend_price),
    ];
    for (name, price) in prices {
        if price <= Decimal::ZERO {
            return Err(GrandPrixError::Config(
                format!("Ticket price for {} must be greater than 0", name)
            ));
        }
    }

    let bases = [
        ("customer", config.customer_id_base),
        ("booking", config.booking_id_base),
        ("payment", config.payment_id_base),
    ];
    for (name, base) in bases {
        if base <= 0 {
            return Err(GrandPrixError::Config(
                format!("Identifier base for {} must be greater than 0", name)
            ));
        }
    }

    Ok(())
}

/// Validate seed configuration
fn validate_seed_config(config: &super::SeedConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    if !is_valid_email(&config.admin_email) {
        return Err(GrandPrixError::Config(
            format!("Seed admin email is invalid: {}", config.admin_email)
        ));
    }

    if config.admin_password.is_empty() {
        return Err(GrandPrixError::Config(
            "Seed admin password is required".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(GrandPrixError::Config(_)));
    }

    #[test]
    fn test_rejects_free_tickets() {
        let mut settings = Settings::default();
        settings.booking.weekend_price = Decimal::ZERO;
        assert_matches!(validate_settings(&settings), Err(GrandPrixError::Config(msg)) if msg.contains("weekend"));
    }

    #[test]
    fn test_seed_checks_skipped_when_disabled() {
        let mut settings = Settings::default();
        settings.seed.admin_email = "not-an-email".to_string();
        assert!(validate_settings(&settings).is_err());

        settings.seed.enabled = false;
        assert!(validate_settings(&settings).is_ok());
    }
}
