//! Database module
//!
//! This module handles snapshot storage and the repositories built on it

pub mod storage;
pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used database components
pub use storage::{CollectionName, SnapshotStore};
pub use repositories::{
    AdminRepository, BookingRepository, CustomerRepository, DiscountRepository, EventRepository,
    PaymentRepository, TicketRepository,
};
pub use service::DataManager;
