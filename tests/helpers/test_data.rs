//! Test data helpers for creating records and requests

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use GrandPrix::database::DataManager;
use GrandPrix::models::{
    AccountStatus, Admin, CardType, CreateEventRequest, Customer, Discount, Event, RegisterCustomerRequest,
    TicketType, UserProfile,
};
use GrandPrix::services::{BookingRequest, PaymentInput};
use GrandPrix::utils::PasswordHash;

pub const TEST_PASSWORD: &str = "pitlane-2024";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn test_customer(id: i64, name: &str, email: &str) -> Customer {
    Customer {
        profile: UserProfile {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: PasswordHash::new(TEST_PASSWORD),
            registered_at: Utc::now(),
        },
        address: "Yas Island, Abu Dhabi".to_string(),
        phone: "+971500000000".to_string(),
        payment_info: "Visa".to_string(),
    }
}

pub fn test_admin(id: i64, email: &str, status: AccountStatus) -> Admin {
    Admin {
        profile: UserProfile {
            id,
            name: "Race Control".to_string(),
            email: email.to_string(),
            password: PasswordHash::new(TEST_PASSWORD),
            registered_at: Utc::now(),
        },
        role: "Operations".to_string(),
        employee_id: 2000 + id,
        status,
    }
}

pub fn registration(name: &str, email: &str) -> RegisterCustomerRequest {
    RegisterCustomerRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        address: "Silverstone, Towcester".to_string(),
        phone: "+441234567890".to_string(),
        payment_info: "MasterCard".to_string(),
    }
}

pub fn event_request(id: i64, capacity: u32) -> CreateEventRequest {
    CreateEventRequest {
        id,
        name: format!("Grand Prix - Round {}", id),
        date: date(2025, 6, 1),
        location: "Test Circuit".to_string(),
        capacity,
    }
}

pub fn discount(id: i64, code: &str, percentage: i64, amount: i64, max_cap: i64) -> Discount {
    Discount {
        id,
        percentage: Decimal::from(percentage),
        amount: Decimal::from(amount),
        code: code.to_string(),
        max_cap: Decimal::from(max_cap),
    }
}

pub fn card() -> PaymentInput {
    PaymentInput::CreditCard {
        card_number: "4111111111111111".to_string(),
        expiry_date: "12/27".to_string(),
        card_type: CardType::Visa,
    }
}

pub fn booking_request(user_id: i64, event_id: i64, ticket_type: TicketType, quantity: u32) -> BookingRequest {
    BookingRequest {
        user_id,
        event_id,
        ticket_type,
        quantity,
        discount_code: None,
        payment: card(),
    }
}

/// Add a customer and an event of the given capacity to `manager`
pub fn setup_customer_and_event(manager: &mut DataManager, capacity: u32) -> (Customer, Event) {
    let customer = manager
        .add_customer(test_customer(100, "Lewis Fan", "fan@example.com"))
        .expect("Failed to add customer");
    let event = manager
        .create_event(event_request(301, capacity))
        .expect("Failed to create event");
    (customer, event)
}
