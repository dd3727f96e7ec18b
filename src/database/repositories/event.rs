//! Event repository implementation

use crate::database::repositories::collection::{Collection, Record};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::models::Event;
use crate::utils::errors::Result;

impl Record for Event {
    type Key = i64;

    const COLLECTION: CollectionName = CollectionName::Events;
    const ENTITY: &'static str = "Event";

    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct EventRepository {
    records: Collection<Event>,
}

impl EventRepository {
    pub fn new(store: SnapshotStore) -> Result<Self> {
        Ok(Self { records: Collection::load(store)? })
    }

    /// Create a new event, refusing a duplicate id
    pub fn add(&mut self, event: Event) -> Result<Event> {
        self.records.insert(event)
    }

    /// Find event by ID
    pub fn find_by_id(&self, id: i64) -> Option<Event> {
        self.records.get(&id).cloned()
    }

    /// Update event
    pub fn update(&mut self, event: Event) -> Result<bool> {
        self.records.replace(event)
    }

    /// Delete event. Dependent bookings must be checked by the caller.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.records.remove(&id)
    }

    /// All events ordered by date
    pub fn list(&self) -> Vec<Event> {
        let mut events = self.records.all().to_vec();
        events.sort_by_key(|e| (e.date, e.id));
        events
    }

    /// Count total events
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::config::StorageConfig;

    fn event(id: i64, month: u32) -> Event {
        Event {
            id,
            name: format!("Round {}", id),
            date: NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
            location: "Circuit".to_string(),
            capacity: 10,
        }
    }

    #[test]
    fn test_delete_makes_event_unfindable() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(&StorageConfig { data_dir: dir.path().to_path_buf() });
        let mut repo = EventRepository::new(store).unwrap();
        repo.add(event(1, 5)).unwrap();

        assert!(repo.delete(1).unwrap());
        assert!(repo.find_by_id(1).is_none());
        assert!(!repo.delete(1).unwrap());
    }

    #[test]
    fn test_list_orders_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(&StorageConfig { data_dir: dir.path().to_path_buf() });
        let mut repo = EventRepository::new(store).unwrap();
        repo.add(event(1, 9)).unwrap();
        repo.add(event(2, 3)).unwrap();

        let ids: Vec<i64> = repo.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
