//! Database repositories module
//!
//! This module contains one repository per persisted collection

pub mod collection;
pub mod user;
pub mod admin;
pub mod event;
pub mod booking;
pub mod ticket;
pub mod payment;
pub mod discount;

// Re-export repositories
pub use collection::{Collection, Record};
pub use user::CustomerRepository;
pub use admin::AdminRepository;
pub use event::EventRepository;
pub use booking::BookingRepository;
pub use ticket::TicketRepository;
pub use payment::PaymentRepository;
pub use discount::DiscountRepository;
