//! Discount repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Discount;
use crate::utils::errors::{GrandPrixError, Result};

impl Record for Discount {
    type Key = i64;

    const COLLECTION: CollectionName = CollectionName::Discounts;
    const ENTITY: &'static str = "Discount";

    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct DiscountRepository {
    records: Collection<Discount>,
}

impl DiscountRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    /// Add a discount, refusing a duplicate id or code
    pub fn add(&mut self, discount: Discount) -> Result<Discount> {
        if self.find_by_code(&discount.code).is_some() {
            return Err(GrandPrixError::Conflict(format!("Discount code {} already exists", discount.code)));
        }
        self.records.insert(discount)
    }

    pub fn find_by_id(&self, id: i64) -> Option<Discount> {
        self.records.get(&id).cloned()
    }

    /// Codes match exactly, as typed by the customer
    pub fn find_by_code(&self, code: &str) -> Option<Discount> {
        self.records.find(|d| d.code == code).cloned()
    }

    pub fn update(&mut self, discount: Discount) -> Result<bool> {
        self.records.replace(discount)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.records.remove(&id)
    }

    pub fn list(&self) -> Vec<Discount> {
        self.records.all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}
