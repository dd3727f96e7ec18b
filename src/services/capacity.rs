//! Ticket availability

use crate::models::Event;

/// Tickets still available: capacity minus tickets already issued. Negative
/// only if the stored data was edited by hand.
pub fn remaining(event: &Event, issued: usize) -> i64 {
    i64::from(event.capacity) - issued as i64
}

/// Whether `quantity` more tickets fit into the event
pub fn can_issue(event: &Event, issued: usize, quantity: u32) -> bool {
    remaining(event, issued) >= i64::from(quantity)
}
