//! Customer repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Customer;
use crate::utils::errors::{GrandPrixError, Result};

impl Record for Customer {
    type Key = i64;

    const COLLECTION: CollectionName = CollectionName::Customers;
    const ENTITY: &'static str = "Customer";

    fn key(&self) -> i64 {
        self.profile.id
    }
}

pub(crate) fn same_email(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[derive(Debug, Clone)]
pub struct CustomerRepository {
    records: Collection<Customer>,
}

impl CustomerRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    /// Add a customer, refusing a duplicate id or email
    pub fn add(&mut self, customer: Customer) -> Result<Customer> {
        if self.find_by_email(&customer.profile.email).is_some() {
            return Err(GrandPrixError::Conflict(format!("Email {} is already registered", customer.profile.email)));
        }
        self.records.insert(customer)
    }

    /// Find customer by ID
    pub fn find_by_id(&self, id: i64) -> Option<Customer> {
        self.records.get(&id).cloned()
    }

    /// Find customer by email, ignoring ASCII case
    pub fn find_by_email(&self, email: &str) -> Option<Customer> {
        self.records.find(|c| same_email(&c.profile.email, email)).cloned()
    }

    /// Replace the stored customer with the same id
    pub fn update(&mut self, customer: Customer) -> Result<bool> {
        self.records.replace(customer)
    }

    /// Delete customer. Dependent bookings must be checked by the caller.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.records.remove(&id)
    }

    pub fn list(&self) -> Vec<Customer> {
        self.records.all().to_vec()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Next free customer id, never below `base`
    pub fn next_id(&self, base: i64) -> i64 {
        self.records.all().iter().map(|c| c.profile.id + 1).max().unwrap_or(base).max(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use crate::config::StorageConfig;
    use crate::models::UserProfile;
    use crate::utils::password::PasswordHash;

    fn customer(id: i64, email: &str) -> Customer {
        Customer {
            profile: UserProfile {
                id,
                name: "Lewis".to_string(),
                email: email.to_string(),
                password: PasswordHash::new("secret"),
                registered_at: Utc::now(),
            },
            address: "1 Paddock Lane".to_string(),
            phone: "+971 50 000 0000".to_string(),
            payment_info: String::new(),
        }
    }

    fn repository(dir: &tempfile::TempDir) -> CustomerRepository {
        let store = SnapshotStore::new(&StorageConfig { data_dir: dir.path().to_path_buf() });
        CustomerRepository::new(store).unwrap()
    }

    #[test]
    fn test_duplicate_email_is_a_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = repository(&dir);
        repo.add(customer(100, "fan@example.com")).unwrap();

        assert_matches!(repo.add(customer(101, "FAN@example.com")), Err(GrandPrixError::Conflict(_)));
        assert_matches!(repo.add(customer(100, "other@example.com")), Err(GrandPrixError::Conflict(_)));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_update_missing_customer_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = repository(&dir);
        repo.add(customer(100, "fan@example.com")).unwrap();
        let before = repo.list();

        assert!(!repo.update(customer(999, "ghost@example.com")).unwrap());
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn test_next_id_skips_past_highest() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = repository(&dir);
        assert_eq!(repo.next_id(100), 100);

        repo.add(customer(100, "a@example.com")).unwrap();
        repo.add(customer(105, "b@example.com")).unwrap();
        repo.delete(100).unwrap();
        assert_eq!(repo.next_id(100), 106);

        // Only this collection is consulted; references held elsewhere are
        // accounted for by the data manager.
        repo.delete(105).unwrap();
        assert_eq!(repo.next_id(100), 100);
    }
}
