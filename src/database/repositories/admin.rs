//! Admin repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::repositories::user::same_email;
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Admin;
use crate::utils::errors::{GrandPrixError, Result};

impl Record for Admin {
    type Key = i64;

    const COLLECTION: CollectionName = CollectionName::Admins;
    const ENTITY: &'static str = "Admin";

    fn key(&self) -> i64 {
        self.profile.id
    }
}

#[derive(Debug, Clone)]
pub struct AdminRepository {
    records: Collection<Admin>,
}

impl AdminRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    /// Add an admin, refusing a duplicate id or email
    pub fn add(&mut self, admin: Admin) -> Result<Admin> {
        if self.find_by_email(&admin.profile.email).is_some() {
            return Err(GrandPrixError::Conflict(format!("Email {} is already registered", admin.profile.email)));
        }
        self.records.insert(admin)
    }

    /// Find admin by ID
    pub fn find_by_id(&self, id: i64) -> Option<Admin> {
        self.records.get(&id).cloned()
    }

    /// Find admin by email, ignoring ASCII case
    pub fn find_by_email(&self, email: &str) -> Option<Admin> {
        self.records.find(|a| same_email(&a.profile.email, email)).cloned()
    }

    pub fn update(&mut self, admin: Admin) -> Result<bool> {
        self.records.replace(admin)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.records.remove(&id)
    }

    pub fn list(&self) -> Vec<Admin> {
        self.records.all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}
