//! Integration tests for snapshot persistence

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use GrandPrix::models::TicketType;
use GrandPrix::services::PaymentInput;
use GrandPrix::{DataManager, GrandPrixError};

#[test]
fn test_reopen_reproduces_all_collections() {
    let mut ctx = TestContext::new();
    let customer = ctx.manager.add_customer(test_customer(100, "Fan", "fan@example.com")).unwrap();
    let booking = ctx.services.booking_service.clone();

    booking
        .book(&mut ctx.manager, booking_request(customer.profile.id, 201, TicketType::Weekend, 2))
        .unwrap();
    let mut digital = booking_request(customer.profile.id, 202, TicketType::Vip, 1);
    digital.payment = PaymentInput::Digital {
        account_identifier: "fan@example.com".to_string(),
        provider: "PayPal".to_string(),
    };
    booking.book(&mut ctx.manager, digital).unwrap();
    ctx.manager.cancel_booking(1001).unwrap();

    let reopened = ctx.reopen();
    assert_eq!(reopened.customers.list(), ctx.manager.customers.list());
    assert_eq!(reopened.admins.list(), ctx.manager.admins.list());
    assert_eq!(reopened.events.list(), ctx.manager.events.list());
    assert_eq!(reopened.bookings.list(), ctx.manager.bookings.list());
    assert_eq!(reopened.tickets.list(), ctx.manager.tickets.list());
    assert_eq!(reopened.payments.list(), ctx.manager.payments.list());
    assert_eq!(reopened.discounts.list(), ctx.manager.discounts.list());
}

#[test]
fn test_snapshots_use_tagged_variants() {
    let mut ctx = TestContext::new();
    let customer = ctx.manager.add_customer(test_customer(100, "Fan", "fan@example.com")).unwrap();
    let booking = ctx.services.booking_service.clone();
    booking
        .book(&mut ctx.manager, booking_request(customer.profile.id, 201, TicketType::Standard, 1))
        .unwrap();

    let tickets: serde_json::Value = serde_json::from_str(&ctx.snapshot("tickets.json").unwrap()).unwrap();
    assert_eq!(tickets[0]["kind"]["variant"], "SingleRacePass");
    assert_eq!(tickets[0]["id"], "T1001-1");

    let payments: serde_json::Value = serde_json::from_str(&ctx.snapshot("payments.json").unwrap()).unwrap();
    assert_eq!(payments[0]["method"]["type"], "CreditCard");

    let customers = ctx.snapshot("customers.json").unwrap();
    assert!(!customers.contains(TEST_PASSWORD));
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let ctx = TestContext::new();
    std::fs::write(ctx.settings.storage.data_dir.join("events.json"), "{ not json").unwrap();

    assert_matches!(DataManager::open(&ctx.settings), Err(GrandPrixError::Serialization(_)));
}

#[test]
fn test_empty_directory_without_seed_stays_empty() {
    let ctx = TestContext::empty();

    assert_eq!(ctx.manager.events.count(), 0);
    assert!(ctx.snapshot("events.json").is_none());
    assert_eq!(ctx.reopen().events.count(), 0);
}
