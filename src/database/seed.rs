//! Default records written into an empty data directory

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;
use crate::config::SeedConfig;
use crate::database::service::DataManager;
use crate::models::{AccountStatus, Admin, Discount, Event, UserProfile};
use crate::utils::errors::{GrandPrixError, Result};
use crate::utils::password::PasswordHash;

pub const SEED_ADMIN_ID: i64 = 1;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| GrandPrixError::Config(format!("Invalid seed date {}-{}-{}", year, month, day)))
}

pub fn default_events() -> Result<Vec<Event>> {
    Ok(vec![
        Event {
            id: 201,
            name: "Grand Prix - Abu Dhabi".to_string(),
            date: date(2024, 11, 26)?,
            location: "Abu Dhabi Circuit".to_string(),
            capacity: 1000,
        },
        Event {
            id: 202,
            name: "Grand Prix - Silverstone".to_string(),
            date: date(2024, 12, 15)?,
            location: "Silverstone Circuit".to_string(),
            capacity: 1200,
        },
    ])
}

pub fn default_discounts() -> Vec<Discount> {
    vec![
        Discount {
            id: 1,
            percentage: Decimal::from(10),
            amount: Decimal::ZERO,
            code: "EARLY10".to_string(),
            max_cap: Decimal::from(100),
        },
        Discount {
            id: 2,
            percentage: Decimal::ZERO,
            amount: Decimal::from(15),
            code: "FLAT15".to_string(),
            max_cap: Decimal::from(15),
        },
    ]
}

pub fn default_admin(config: &SeedConfig) -> Admin {
    Admin {
        profile: UserProfile {
            id: SEED_ADMIN_ID,
            name: "Admin".to_string(),
            email: config.admin_email.clone(),
            password: PasswordHash::new(&config.admin_password),
            registered_at: Utc::now(),
        },
        role: "System Admin".to_string(),
        employee_id: 1001,
        status: AccountStatus::Active,
    }
}

/// Populate the default events, discounts and administrator. Records that
/// already exist (matched by id, code or email) are left alone.
pub fn seed_defaults(manager: &mut DataManager, config: &SeedConfig) -> Result<()> {
    for event in default_events()? {
        if manager.events.find_by_id(event.id).is_none() {
            manager.events.add(event)?;
        }
    }

    for discount in default_discounts() {
        if manager.discounts.find_by_id(discount.id).is_none()
            && manager.discounts.find_by_code(&discount.code).is_none()
        {
            manager.discounts.add(discount)?;
        }
    }

    if manager.admins.find_by_id(SEED_ADMIN_ID).is_none()
        && manager.find_account_by_email(&config.admin_email).is_none()
    {
        manager.admins.add(default_admin(config))?;
    }

    info!(
        events = manager.events.count(),
        discounts = manager.discounts.count(),
        admins = manager.admins.count(),
        "Seeded default data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_records_pass_validation() {
        for event in default_events().unwrap() {
            event.validate().unwrap();
        }
        for discount in default_discounts() {
            discount.validate().unwrap();
        }
    }

    #[test]
    fn test_default_admin_uses_configured_credentials() {
        let config = SeedConfig {
            enabled: true,
            admin_email: "ops@circuit.test".to_string(),
            admin_password: "grid-start".to_string(),
        };
        let admin = default_admin(&config);
        assert_eq!(admin.profile.email, "ops@circuit.test");
        assert!(admin.profile.password.verify("grid-start"));
        assert_eq!(admin.role, "System Admin");
    }
}
