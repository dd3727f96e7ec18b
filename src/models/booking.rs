//! Booking model

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::utils::errors::{GrandPrixError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub booked_at: DateTime<Utc>,
    pub ticket_count: u32,
    pub total_price: Decimal,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Cancelled is terminal; everything else may move forward or be cancelled.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Confirmed) => true,
            (BookingStatus::Pending, BookingStatus::Cancelled) => true,
            (BookingStatus::Confirmed, BookingStatus::Cancelled) => true,
            (current, next) => *current == next && next != BookingStatus::Cancelled,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "Pending"),
            BookingStatus::Confirmed => write!(f, "Confirmed"),
            BookingStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl Booking {
    pub fn validate(&self) -> Result<()> {
        if self.ticket_count == 0 {
            return Err(GrandPrixError::Validation("A booking needs at least one ticket".to_string()));
        }
        if self.total_price < Decimal::ZERO {
            return Err(GrandPrixError::Validation("Total price cannot be negative".to_string()));
        }
        Ok(())
    }

    /// Move the booking to `next`, refusing transitions out of a terminal state
    pub fn transition_to(&mut self, next: BookingStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(GrandPrixError::InvalidStateTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}
