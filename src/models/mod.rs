//! Data models module
//!
//! This module contains all records owned by the data manager

pub mod user;
pub mod admin;
pub mod event;
pub mod discount;
pub mod booking;
pub mod ticket;
pub mod payment;

// Re-export commonly used models
pub use user::{UserProfile, Customer, Account, RegisterCustomerRequest, UpdateProfileRequest, ChangePasswordRequest};
pub use admin::{Admin, AccountStatus};
pub use event::{Event, CreateEventRequest, UpdateEventRequest};
pub use discount::{Discount, UpdateDiscountRequest};
pub use booking::{Booking, BookingStatus};
pub use ticket::{ticket_id, Ticket, TicketKind, TicketType};
pub use payment::{Payment, PaymentMethod, PaymentType, PaymentStatus, CardType, Refund};
