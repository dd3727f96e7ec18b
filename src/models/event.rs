//! Event model

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::utils::errors::{GrandPrixError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    /// Maximum number of tickets that may be issued against the event
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub capacity: u32,
}

impl Event {
    /// Check the fields an admin form must always supply
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GrandPrixError::Validation("Event name is required".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(GrandPrixError::Validation("Event location is required".to_string()));
        }
        if self.capacity == 0 {
            return Err(GrandPrixError::Validation("Capacity must be positive".to_string()));
        }
        Ok(())
    }

    /// Apply an edit, leaving the identifier untouched
    pub fn apply_update(&mut self, request: UpdateEventRequest) {
        self.name = request.name;
        self.date = request.date;
        self.location = request.location;
        self.capacity = request.capacity;
    }
}

impl From<CreateEventRequest> for Event {
    fn from(request: CreateEventRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            date: request.date,
            location: request.location,
            capacity: request.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn silverstone() -> Event {
        Event {
            id: 202,
            name: "Grand Prix - Silverstone".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            location: "Silverstone Circuit".to_string(),
            capacity: 1200,
        }
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut event = silverstone();
        assert!(event.validate().is_ok());

        event.capacity = 0;
        assert_matches!(event.validate(), Err(GrandPrixError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut event = silverstone();
        event.name = "   ".to_string();
        assert_matches!(event.validate(), Err(GrandPrixError::Validation(msg)) if msg.contains("name"));
    }
}
