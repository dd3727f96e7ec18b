//! Sales reports
//!
//! Aggregates only; presentation is left to the caller. Cancelled bookings
//! are excluded from every figure.

use std::collections::BTreeMap;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use crate::database::DataManager;
use crate::models::Booking;

/// Sales for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub bookings: usize,
    pub tickets: u64,
    pub revenue: Decimal,
}

/// Sales for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSales {
    pub event_id: i64,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub capacity: u32,
    pub tickets_sold: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalesTotals {
    pub bookings: usize,
    pub tickets: u64,
    pub revenue: Decimal,
}

fn active_bookings(manager: &DataManager) -> impl Iterator<Item = Booking> {
    manager.bookings.list().into_iter().filter(|b| !b.is_cancelled())
}

/// Sales grouped by booking day, most recent first
pub fn daily_sales(manager: &DataManager) -> Vec<DailySales> {
    let mut days: BTreeMap<NaiveDate, DailySales> = BTreeMap::new();
    for booking in active_bookings(manager) {
        let date = booking.booked_at.date_naive();
        let entry = days.entry(date).or_insert_with(|| DailySales {
            date,
            bookings: 0,
            tickets: 0,
            revenue: Decimal::ZERO,
        });
        entry.bookings += 1;
        entry.tickets += u64::from(booking.ticket_count);
        entry.revenue += booking.total_price;
    }
    days.into_values().rev().collect()
}

/// Sales per event, ordered by event date. Events without sales are included.
pub fn event_sales(manager: &DataManager) -> Vec<EventSales> {
    let mut sales: Vec<EventSales> = manager
        .events
        .list()
        .into_iter()
        .map(|event| EventSales {
            event_id: event.id,
            event_name: event.name,
            event_date: event.date,
            capacity: event.capacity,
            tickets_sold: 0,
            revenue: Decimal::ZERO,
        })
        .collect();

    for booking in active_bookings(manager) {
        if let Some(entry) = sales.iter_mut().find(|s| s.event_id == booking.event_id) {
            entry.tickets_sold += u64::from(booking.ticket_count);
            entry.revenue += booking.total_price;
        }
    }

    sales.sort_by_key(|s| (s.event_date, s.event_id));
    sales
}

pub fn totals(manager: &DataManager) -> SalesTotals {
    active_bookings(manager).fold(SalesTotals::default(), |mut totals, booking| {
        totals.bookings += 1;
        totals.tickets += u64::from(booking.ticket_count);
        totals.revenue += booking.total_price;
        totals
    })
}
