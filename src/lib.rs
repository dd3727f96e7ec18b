//! GrandPrix ticket booking core
//!
//! Events, bookings, tickets, payments and discounts kept in snapshot-backed
//! collections, with capacity accounting, discount arithmetic and booking
//! status rules enforced by the data manager and the booking workflow.

#![allow(non_snake_case)]

pub mod config;
pub mod services;
pub mod models;
pub mod database;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GrandPrixError, Result};

// Re-export main components for easy access
pub use database::DataManager;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
