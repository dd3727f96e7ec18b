//! Ticket repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Ticket;
use crate::utils::errors::Result;

impl Record for Ticket {
    type Key = String;

    const COLLECTION: CollectionName = CollectionName::Tickets;
    const ENTITY: &'static str = "Ticket";

    fn key(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone)]
pub struct TicketRepository {
    records: Collection<Ticket>,
}

impl TicketRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    /// Issue a ticket. Ticket ids are unique across the whole collection,
    /// which also keeps them unique within each event.
    pub fn add(&mut self, ticket: Ticket) -> Result<Ticket> {
        self.records.insert(ticket)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Ticket> {
        self.records.find(|t| t.id == id).cloned()
    }

    pub fn find_by_booking_id(&self, booking_id: i64) -> Vec<Ticket> {
        self.records.filter(|t| t.booking_id == booking_id)
    }

    pub fn find_by_event_id(&self, event_id: i64) -> Vec<Ticket> {
        self.records.filter(|t| t.event_id == event_id)
    }

    /// Number of tickets issued against an event
    pub fn count_for_event(&self, event_id: i64) -> usize {
        self.records.all().iter().filter(|t| t.event_id == event_id).count()
    }

    /// Highest booking id referenced by any ticket
    pub fn highest_booking_id(&self) -> Option<i64> {
        self.records.all().iter().map(|t| t.booking_id).max()
    }

    pub fn update(&mut self, ticket: Ticket) -> Result<bool> {
        self.records.replace(ticket)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.records.remove(&id.to_string())
    }

    pub fn list(&self) -> Vec<Ticket> {
        self.records.all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}
