//! Booking service implementation
//!
//! This service turns a customer's order into a confirmed booking, its
//! payment and the issued tickets. Every check runs before the first write,
//! so a rejected order leaves all collections untouched.

use chrono::{NaiveTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{debug, info};
use crate::config::BookingConfig;
use crate::database::DataManager;
use crate::models::{
    ticket_id, Booking, BookingStatus, CardType, Customer, Event, Payment, PaymentMethod, PaymentStatus,
    Ticket, TicketKind, TicketType,
};
use crate::services::capacity;
use crate::utils::errors::{GrandPrixError, Result};
use crate::utils::helpers::format_timestamp;
use crate::utils::logging::{log_booking_action, log_booking_rejected};

/// Payment details as entered at checkout
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentInput {
    CreditCard {
        card_number: String,
        expiry_date: String,
        card_type: CardType,
    },
    Digital {
        account_identifier: String,
        provider: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub user_id: i64,
    pub event_id: i64,
    pub ticket_type: TicketType,
    pub quantity: u32,
    pub discount_code: Option<String>,
    pub payment: PaymentInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub payment: Payment,
    pub tickets: Vec<Ticket>,
}

/// Price of an order before and after any discount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl PaymentInput {
    /// Reject blank required fields
    pub fn validate(&self) -> Result<()> {
        match self {
            PaymentInput::CreditCard { card_number, expiry_date, .. } => {
                if card_number.trim().is_empty() || expiry_date.trim().is_empty() {
                    return Err(GrandPrixError::Validation("Please enter all card details".to_string()));
                }
            }
            PaymentInput::Digital { account_identifier, .. } => {
                if account_identifier.trim().is_empty() {
                    return Err(GrandPrixError::Validation("Please enter your account or email".to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Booking service for ticket purchases
#[derive(Debug, Clone)]
pub struct BookingService {
    config: BookingConfig,
}

impl BookingService {
    pub fn new(config: BookingConfig) -> Self {
        Self { config }
    }

    /// Base price of one ticket of the given type
    pub fn unit_price(&self, ticket_type: TicketType) -> Decimal {
        match ticket_type {
            TicketType::Standard => self.config.standard_price,
            TicketType::Vip => self.config.vip_price,
            TicketType::Weekend => self.config.weekend_price,
        }
    }

    /// Price an order. An unknown discount code is ignored and the full price applies.
    pub fn quote(&self, manager: &DataManager, ticket_type: TicketType, quantity: u32, discount_code: Option<&str>) -> PriceQuote {
        let unit_price = self.unit_price(ticket_type);
        let subtotal = unit_price * Decimal::from(quantity);

        let discount = discount_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .and_then(|code| manager.discounts.find_by_code(code));

        let total = match discount {
            Some(discount) => {
                debug!(code = %discount.code, %subtotal, "Applying discount");
                discount.apply(subtotal)
            }
            None => subtotal,
        };

        PriceQuote { unit_price, subtotal, total }
    }

    /// Book tickets for a customer
    pub fn book(&self, manager: &mut DataManager, request: BookingRequest) -> Result<BookingReceipt> {
        debug!(user_id = request.user_id, event_id = request.event_id, quantity = request.quantity, "Processing booking request");

        if request.quantity == 0 {
            return Err(GrandPrixError::Validation("Please select at least one ticket".to_string()));
        }

        let customer = manager
            .customers
            .find_by_id(request.user_id)
            .ok_or(GrandPrixError::UserNotFound { user_id: request.user_id })?;
        let event = manager
            .events
            .find_by_id(request.event_id)
            .ok_or(GrandPrixError::EventNotFound { event_id: request.event_id })?;

        let issued = manager.tickets.count_for_event(event.id);
        if !capacity::can_issue(&event, issued, request.quantity) {
            let remaining = capacity::remaining(&event, issued);
            log_booking_rejected(event.id, customer.profile.id, "capacity exceeded");
            return Err(GrandPrixError::CapacityExceeded {
                event_id: event.id,
                requested: request.quantity,
                remaining,
            });
        }

        let quote = self.quote(manager, request.ticket_type, request.quantity, request.discount_code.as_deref());

        if let Err(e) = request.payment.validate() {
            log_booking_rejected(event.id, customer.profile.id, "invalid payment details");
            return Err(e);
        }

        let booking_id = manager.next_booking_id();
        let payment_id = manager.next_payment_id();
        let ticket_ids: Vec<String> = (1..=request.quantity).map(|n| ticket_id(booking_id, n)).collect();
        if let Err(e) = manager.ensure_booking_id_free(booking_id, payment_id, &ticket_ids) {
            log_booking_rejected(event.id, customer.profile.id, "identifier collision");
            return Err(e);
        }

        let booking = manager.bookings.add(Booking {
            id: booking_id,
            user_id: customer.profile.id,
            event_id: event.id,
            booked_at: Utc::now(),
            ticket_count: request.quantity,
            total_price: quote.total,
            status: BookingStatus::Confirmed,
        })?;

        let payment = manager.payments.add(Payment {
            id: payment_id,
            booking_id: booking.id,
            paid_at: Utc::now(),
            status: PaymentStatus::Successful,
            refund: None,
            method: payment_method(request.payment),
        })?;

        let mut tickets = Vec::with_capacity(request.quantity as usize);
        for n in 1..=request.quantity {
            let ticket = issue_ticket(&booking, &event, &customer, request.ticket_type, quote.unit_price, issued, n);
            tickets.push(manager.tickets.add(ticket)?);
        }

        log_booking_action(booking.id, "confirmed", booking.user_id, Some(&format!("{} x {}", request.quantity, request.ticket_type)));
        info!(
            booking_id = booking.id,
            payment_id = payment.id,
            tickets = tickets.len(),
            total = %booking.total_price,
            booked_at = %format_timestamp(booking.booked_at),
            "Booking completed"
        );

        Ok(BookingReceipt { booking, payment, tickets })
    }
}

fn payment_method(input: PaymentInput) -> PaymentMethod {
    match input {
        PaymentInput::CreditCard { card_number, expiry_date, card_type } => PaymentMethod::CreditCard {
            card_number: card_number.trim().to_string(),
            expiry_date: expiry_date.trim().to_string(),
            card_type,
        },
        PaymentInput::Digital { account_identifier, provider } => {
            let mut rng = rand::thread_rng();
            PaymentMethod::Digital {
                transaction_id: rng.gen_range(100_000..=999_999),
                account_identifier: account_identifier.trim().to_string(),
                authorization_code: format!("AUTH-{}", rng.gen_range(10_000..=99_999)),
                provider,
            }
        }
    }
}

/// Build the `n`-th ticket (1-based) of a booking. Seats continue after the
/// tickets already issued for the event.
fn issue_ticket(
    booking: &Booking,
    event: &Event,
    customer: &Customer,
    ticket_type: TicketType,
    price: Decimal,
    already_issued: usize,
    n: u32,
) -> Ticket {
    let mut rng = rand::thread_rng();
    let seat = 100 + already_issued + n as usize - 1;

    let kind = match ticket_type {
        TicketType::Standard => TicketKind::SingleRacePass {
            pass_id: rng.gen_range(4001..=4999),
            pass_expiry: event.date,
            pass_benefits: "Standard race day access".to_string(),
        },
        TicketType::Vip => TicketKind::SeasonMembership {
            member_id: rng.gen_range(3001..=3999),
            member_name: customer.profile.name.clone(),
            included_gifts: "VIP Lounge access, complimentary food and drinks".to_string(),
        },
        TicketType::Weekend => TicketKind::WeekendPackage {
            package_id: rng.gen_range(5001..=5999),
            package_type: "Standard Weekend".to_string(),
            package_benefits: "Access to all weekend events, pit lane walk, driver autograph session".to_string(),
        },
    };

    Ticket {
        id: ticket_id(booking.id, n),
        booking_id: booking.id,
        event_id: event.id,
        seat_number: format!("{}{}", ticket_type.seat_prefix(), seat),
        price,
        type_id: ticket_type.type_id(),
        check_in_time: event.date.and_time(NaiveTime::MIN),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_blank_card_details_rejected() {
        let input = PaymentInput::CreditCard {
            card_number: "4111111111111111".to_string(),
            expiry_date: "  ".to_string(),
            card_type: CardType::Visa,
        };
        assert_matches!(input.validate(), Err(GrandPrixError::Validation(_)));
    }

    #[test]
    fn test_blank_digital_account_rejected() {
        let input = PaymentInput::Digital {
            account_identifier: String::new(),
            provider: "PayPal".to_string(),
        };
        assert_matches!(input.validate(), Err(GrandPrixError::Validation(_)));
    }

    #[test]
    fn test_digital_payment_gets_authorization_code() {
        let method = payment_method(PaymentInput::Digital {
            account_identifier: "fan@example.com".to_string(),
            provider: "PayPal".to_string(),
        });
        assert_matches!(method, PaymentMethod::Digital { transaction_id, ref authorization_code, .. } => {
            assert!((100_000..=999_999).contains(&transaction_id));
            assert!(authorization_code.starts_with("AUTH-"));
            assert_eq!(authorization_code.len(), 10);
        });
    }

    #[test]
    fn test_unit_prices_follow_config() {
        let service = BookingService::new(BookingConfig::default());
        assert_eq!(service.unit_price(TicketType::Standard), Decimal::from(100));
        assert_eq!(service.unit_price(TicketType::Vip), Decimal::from(250));
        assert_eq!(service.unit_price(TicketType::Weekend), Decimal::from(400));
    }
}
