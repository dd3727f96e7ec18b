//! Services module
//!
//! This module contains business logic services

pub mod account;
pub mod booking;
pub mod capacity;
pub mod reports;

// Re-export commonly used services
pub use account::AccountService;
pub use booking::{BookingReceipt, BookingRequest, BookingService, PaymentInput, PriceQuote};
pub use reports::{DailySales, EventSales, SalesTotals};

use crate::config::Settings;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub account_service: AccountService,
    pub booking_service: BookingService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Self {
        Self {
            account_service: AccountService::new(),
            booking_service: BookingService::new(settings.booking.clone()),
        }
    }
}
