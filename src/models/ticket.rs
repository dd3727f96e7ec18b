//! Ticket model
//!
//! Every ticket carries the same base fields; the `kind` payload holds the
//! benefit metadata of the concrete ticket variant.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use crate::utils::errors::GrandPrixError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// `T<booking id>-<n>`, unique within the event
    pub id: String,
    pub booking_id: i64,
    pub event_id: i64,
    pub seat_number: String,
    pub price: Decimal,
    pub type_id: u32,
    pub check_in_time: NaiveDateTime,
    pub kind: TicketKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum TicketKind {
    Standard,
    GroupDiscount {
        group_id: i64,
        group_count: u32,
        group_gifts: String,
    },
    SeasonMembership {
        member_id: i64,
        member_name: String,
        included_gifts: String,
    },
    SingleRacePass {
        pass_id: i64,
        pass_expiry: NaiveDate,
        pass_benefits: String,
    },
    WeekendPackage {
        package_id: i64,
        package_type: String,
        package_benefits: String,
    },
}

impl TicketKind {
    pub fn name(&self) -> &'static str {
        match self {
            TicketKind::Standard => "Standard",
            TicketKind::GroupDiscount { .. } => "Group Discount",
            TicketKind::SeasonMembership { .. } => "Season Membership",
            TicketKind::SingleRacePass { .. } => "Single Race Pass",
            TicketKind::WeekendPackage { .. } => "Weekend Package",
        }
    }

    /// Human readable benefits of the variant
    pub fn benefits(&self) -> Option<&str> {
        match self {
            TicketKind::Standard => None,
            TicketKind::GroupDiscount { group_gifts, .. } => Some(group_gifts),
            TicketKind::SeasonMembership { included_gifts, .. } => Some(included_gifts),
            TicketKind::SingleRacePass { pass_benefits, .. } => Some(pass_benefits),
            TicketKind::WeekendPackage { package_benefits, .. } => Some(package_benefits),
        }
    }
}

/// Ticket categories a customer can buy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    Standard,
    Vip,
    Weekend,
}

impl TicketType {
    pub fn type_id(&self) -> u32 {
        match self {
            TicketType::Standard => 1,
            TicketType::Vip => 2,
            TicketType::Weekend => 3,
        }
    }

    pub fn seat_prefix(&self) -> char {
        match self {
            TicketType::Standard => 'A',
            TicketType::Vip => 'B',
            TicketType::Weekend => 'C',
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketType::Standard => write!(f, "standard"),
            TicketType::Vip => write!(f, "vip"),
            TicketType::Weekend => write!(f, "weekend"),
        }
    }
}

impl FromStr for TicketType {
    type Err = GrandPrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(TicketType::Standard),
            "vip" => Ok(TicketType::Vip),
            "weekend" => Ok(TicketType::Weekend),
            other => Err(GrandPrixError::Validation(format!("Unknown ticket type: {}", other))),
        }
    }
}

/// Derived ticket identifier for the `n`-th ticket (1-based) of a booking
pub fn ticket_id(booking_id: i64, n: u32) -> String {
    format!("T{}-{}", booking_id, n)
}
