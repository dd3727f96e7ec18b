//! Booking repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Booking;
use crate::utils::errors::Result;

impl Record for Booking {
    type Key = i64;

    const COLLECTION: CollectionName = CollectionName::Bookings;
    const ENTITY: &'static str = "Booking";

    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct BookingRepository {
    records: Collection<Booking>,
}

impl BookingRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    pub fn add(&mut self, booking: Booking) -> Result<Booking> {
        booking.validate()?;
        self.records.insert(booking)
    }

    pub fn find_by_id(&self, id: i64) -> Option<Booking> {
        self.records.get(&id).cloned()
    }

    /// All bookings made by a customer
    pub fn find_by_user_id(&self, user_id: i64) -> Vec<Booking> {
        self.records.filter(|b| b.user_id == user_id)
    }

    /// All bookings against an event
    pub fn find_by_event_id(&self, event_id: i64) -> Vec<Booking> {
        self.records.filter(|b| b.event_id == event_id)
    }

    pub fn update(&mut self, booking: Booking) -> Result<bool> {
        self.records.replace(booking)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.records.remove(&id)
    }

    pub fn list(&self) -> Vec<Booking> {
        self.records.all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Highest customer id referenced by any booking
    pub fn highest_user_id(&self) -> Option<i64> {
        self.records.all().iter().map(|b| b.user_id).max()
    }

    /// Next free booking id, never below `base`
    pub fn next_id(&self, base: i64) -> i64 {
        self.records.all().iter().map(|b| b.id + 1).max().unwrap_or(base).max(base)
    }
}
