//! Payment repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Payment;
use crate::utils::errors::Result;

impl Record for Payment {
    type Key = i64;

    const COLLECTION: CollectionName = CollectionName::Payments;
    const ENTITY: &'static str = "Payment";

    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct PaymentRepository {
    records: Collection<Payment>,
}

impl PaymentRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    pub fn add(&mut self, payment: Payment) -> Result<Payment> {
        self.records.insert(payment)
    }

    pub fn find_by_id(&self, id: i64) -> Option<Payment> {
        self.records.get(&id).cloned()
    }

    /// Payments recorded against a booking, retries included
    pub fn find_by_booking_id(&self, booking_id: i64) -> Vec<Payment> {
        self.records.filter(|p| p.booking_id == booking_id)
    }

    pub fn update(&mut self, payment: Payment) -> Result<bool> {
        self.records.replace(payment)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.records.remove(&id)
    }

    pub fn list(&self) -> Vec<Payment> {
        self.records.all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Highest booking id referenced by any payment
    pub fn highest_booking_id(&self) -> Option<i64> {
        self.records.all().iter().map(|p| p.booking_id).max()
    }

    /// Next free payment id, never below `base`
    pub fn next_id(&self, base: i64) -> i64 {
        self.records.all().iter().map(|p| p.id + 1).max().unwrap_or(base).max(base)
    }
}
