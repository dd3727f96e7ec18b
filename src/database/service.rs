//! Data manager
//!
//! This module provides a high-level interface over the repositories. It owns
//! every collection and performs the cross-entity checks the repositories
//! deliberately leave out.

use tracing::{info, warn};
use crate::config::Settings;
use crate::database::repositories::{
    AdminRepository, BookingRepository, CustomerRepository, DiscountRepository, EventRepository,
    PaymentRepository, TicketRepository,
};
use crate::database::seed::seed_defaults;
use crate::database::storage::SnapshotStore;
use crate::models::*;
use crate::services::capacity;
use crate::utils::errors::{GrandPrixError, Result};
use crate::utils::logging::{log_admin_action, log_booking_action};

#[derive(Debug, Clone)]
pub struct DataManager {
    pub customers: CustomerRepository,
    pub admins: AdminRepository,
    pub events: EventRepository,
    pub bookings: BookingRepository,
    pub tickets: TicketRepository,
    pub payments: PaymentRepository,
    pub discounts: DiscountRepository,
    customer_id_base: i64,
    booking_id_base: i64,
    payment_id_base: i64,
}

impl DataManager {
    /// Load every collection from the configured data directory, seeding the
    /// defaults when no events exist yet.
    pub fn open(settings: &Settings) -> Result<Self> {
        let store = SnapshotStore::new(&settings.storage);
        info!(data_dir = %store.data_dir().display(), "Opening data directory");

        let mut manager = Self {
            customers: CustomerRepository::new(store.clone())?,
            admins: AdminRepository::new(store.clone())?,
            events: EventRepository::new(store.clone())?,
            bookings: BookingRepository::new(store.clone())?,
            tickets: TicketRepository::new(store.clone())?,
            payments: PaymentRepository::new(store.clone())?,
            discounts: DiscountRepository::new(store)?,
            customer_id_base: settings.booking.customer_id_base,
            booking_id_base: settings.booking.booking_id_base,
            payment_id_base: settings.booking.payment_id_base,
        };

        if manager.events.is_empty() && settings.seed.enabled {
            seed_defaults(&mut manager, &settings.seed)?;
        }

        info!(
            customers = manager.customers.count(),
            admins = manager.admins.count(),
            events = manager.events.count(),
            bookings = manager.bookings.count(),
            tickets = manager.tickets.count(),
            payments = manager.payments.count(),
            discounts = manager.discounts.count(),
            "Data manager ready"
        );
        Ok(manager)
    }

    /// Look an email up across customers first, then admins
    pub fn find_account_by_email(&self, email: &str) -> Option<Account> {
        if let Some(customer) = self.customers.find_by_email(email) {
            return Some(Account::Customer(customer));
        }
        self.admins.find_by_email(email).map(Account::Admin)
    }

    /// Register a customer; the email must be free in both account collections
    pub fn add_customer(&mut self, customer: Customer) -> Result<Customer> {
        if self.admins.find_by_email(&customer.profile.email).is_some() {
            return Err(GrandPrixError::Conflict(format!("Email {} is already registered", customer.profile.email)));
        }
        self.customers.add(customer)
    }

    pub fn add_admin(&mut self, admin: Admin) -> Result<Admin> {
        if self.customers.find_by_email(&admin.profile.email).is_some() {
            return Err(GrandPrixError::Conflict(format!("Email {} is already registered", admin.profile.email)));
        }
        let admin = self.admins.add(admin)?;
        log_admin_action("create", "admin", admin.profile.id, Some(&admin.role));
        Ok(admin)
    }

    /// Delete a customer that has no bookings
    pub fn delete_customer(&mut self, customer_id: i64) -> Result<bool> {
        let dependents = self.bookings.find_by_user_id(customer_id).len();
        if dependents > 0 {
            warn!(customer_id, dependents, "Refusing to delete customer with bookings");
            return Err(GrandPrixError::DependencyExists { entity: "Customer", id: customer_id, dependents });
        }
        let deleted = self.customers.delete(customer_id)?;
        if deleted {
            log_admin_action("delete", "customer", customer_id, None);
        }
        Ok(deleted)
    }

    pub fn create_event(&mut self, request: CreateEventRequest) -> Result<Event> {
        let event = Event::from(request);
        event.validate()?;
        let event = self.events.add(event)?;
        log_admin_action("create", "event", event.id, Some(&event.name));
        Ok(event)
    }

    /// Edit an event. `Ok(false)` means no such event. The new capacity may
    /// not drop below the tickets already issued.
    pub fn update_event(&mut self, event_id: i64, request: UpdateEventRequest) -> Result<bool> {
        let Some(mut event) = self.events.find_by_id(event_id) else {
            return Ok(false);
        };
        event.apply_update(request);
        event.validate()?;

        let issued = self.tickets.count_for_event(event_id);
        if (event.capacity as usize) < issued {
            return Err(GrandPrixError::Validation(format!(
                "Capacity {} is below the {} tickets already issued",
                event.capacity, issued
            )));
        }

        let updated = self.events.update(event)?;
        if updated {
            log_admin_action("update", "event", event_id, None);
        }
        Ok(updated)
    }

    /// Delete an event that has no bookings
    pub fn delete_event(&mut self, event_id: i64) -> Result<bool> {
        let dependents = self.bookings.find_by_event_id(event_id).len();
        if dependents > 0 {
            warn!(event_id, dependents, "Refusing to delete event with bookings");
            return Err(GrandPrixError::DependencyExists { entity: "Event", id: event_id, dependents });
        }
        let deleted = self.events.delete(event_id)?;
        if deleted {
            log_admin_action("delete", "event", event_id, None);
        }
        Ok(deleted)
    }

    /// Tickets still available for an event
    pub fn remaining_capacity(&self, event_id: i64) -> Result<i64> {
        let event = self.events.find_by_id(event_id).ok_or(GrandPrixError::EventNotFound { event_id })?;
        Ok(capacity::remaining(&event, self.tickets.count_for_event(event_id)))
    }

    pub fn create_discount(&mut self, discount: Discount) -> Result<Discount> {
        discount.validate()?;
        let discount = self.discounts.add(discount)?;
        log_admin_action("create", "discount", discount.id, Some(&discount.code));
        Ok(discount)
    }

    /// Edit a discount. `Ok(false)` means no such discount. The code must not
    /// be used by any other discount.
    pub fn update_discount(&mut self, discount_id: i64, request: UpdateDiscountRequest) -> Result<bool> {
        let Some(mut discount) = self.discounts.find_by_id(discount_id) else {
            return Ok(false);
        };
        discount.apply_update(request);
        discount.validate()?;

        if let Some(other) = self.discounts.find_by_code(&discount.code) {
            if other.id != discount_id {
                return Err(GrandPrixError::Conflict(format!("Discount code {} already exists", discount.code)));
            }
        }

        let updated = self.discounts.update(discount)?;
        if updated {
            log_admin_action("update", "discount", discount_id, None);
        }
        Ok(updated)
    }

    pub fn delete_discount(&mut self, discount_id: i64) -> Result<bool> {
        let deleted = self.discounts.delete(discount_id)?;
        if deleted {
            log_admin_action("delete", "discount", discount_id, None);
        }
        Ok(deleted)
    }

    /// Cancel a booking. Issued tickets are kept, so capacity is unchanged.
    pub fn cancel_booking(&mut self, booking_id: i64) -> Result<Booking> {
        let mut booking = self.bookings.find_by_id(booking_id).ok_or(GrandPrixError::BookingNotFound { booking_id })?;
        booking.transition_to(BookingStatus::Cancelled)?;
        self.bookings.update(booking.clone())?;
        log_booking_action(booking.id, "cancelled", booking.user_id, None);
        Ok(booking)
    }

    /// Record a refund against a payment. A payment is refunded at most once.
    pub fn refund_payment(&mut self, payment_id: i64, reason: &str) -> Result<Payment> {
        let mut payment = self.payments.find_by_id(payment_id).ok_or(GrandPrixError::PaymentNotFound { payment_id })?;
        if payment.is_refunded() {
            return Err(GrandPrixError::Conflict(format!("Payment {} is already refunded", payment_id)));
        }
        if reason.trim().is_empty() {
            return Err(GrandPrixError::Validation("Refund reason is required".to_string()));
        }

        payment.refund = Some(Refund {
            id: format!("R{}", payment_id),
            reason: reason.trim().to_string(),
        });
        self.payments.update(payment.clone())?;
        log_admin_action("refund", "payment", payment_id, Some(reason));
        Ok(payment)
    }

    /// Next customer id. Ids still referenced by bookings are never handed
    /// out again, even after the customer record itself is gone.
    pub fn next_customer_id(&self) -> i64 {
        let referenced = self.bookings.highest_user_id().map_or(i64::MIN, |id| id + 1);
        self.customers.next_id(self.customer_id_base).max(referenced)
    }

    /// Next booking id. Payments and tickets keep their booking id after the
    /// booking is deleted, so those ids stay taken.
    pub fn next_booking_id(&self) -> i64 {
        let referenced = [self.payments.highest_booking_id(), self.tickets.highest_booking_id()]
            .into_iter()
            .flatten()
            .map(|id| id + 1)
            .max()
            .unwrap_or(i64::MIN);
        self.bookings.next_id(self.booking_id_base).max(referenced)
    }

    /// Refuse a booking id that would collide with existing records
    pub fn ensure_booking_id_free(&self, booking_id: i64, payment_id: i64, ticket_ids: &[String]) -> Result<()> {
        if self.bookings.find_by_id(booking_id).is_some()
            || !self.payments.find_by_booking_id(booking_id).is_empty()
            || !self.tickets.find_by_booking_id(booking_id).is_empty()
        {
            return Err(GrandPrixError::Conflict(format!("Booking {} already has records", booking_id)));
        }
        if self.payments.find_by_id(payment_id).is_some() {
            return Err(GrandPrixError::Conflict(format!("Payment {} already exists", payment_id)));
        }
        if let Some(id) = ticket_ids.iter().find(|id| self.tickets.find_by_id(id).is_some()) {
            return Err(GrandPrixError::Conflict(format!("Ticket {} already exists", id)));
        }
        Ok(())
    }

    pub fn next_payment_id(&self) -> i64 {
        self.payments.next_id(self.payment_id_base)
    }
}
