//! Payment model

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::helpers::mask_card_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub paid_at: DateTime<Utc>,
    pub status: PaymentStatus,
    pub refund: Option<Refund>,
    pub method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PaymentMethod {
    CreditCard {
        card_number: String,
        expiry_date: String,
        card_type: CardType,
    },
    Digital {
        transaction_id: i64,
        account_identifier: String,
        authorization_code: String,
        provider: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    CreditCard,
    Digital,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Successful,
    Failed,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Visa,
    MasterCard,
    Amex,
}

impl Payment {
    pub fn payment_type(&self) -> PaymentType {
        match self.method {
            PaymentMethod::CreditCard { .. } => PaymentType::CreditCard,
            PaymentMethod::Digital { .. } => PaymentType::Digital,
        }
    }

    pub fn is_refunded(&self) -> bool {
        self.refund.is_some()
    }

    /// Short description safe to show on screens and receipts
    pub fn summary(&self) -> String {
        match &self.method {
            PaymentMethod::CreditCard { card_number, card_type, .. } => {
                format!("{} {}", card_type, mask_card_number(card_number))
            }
            PaymentMethod::Digital { provider, account_identifier, .. } => {
                format!("{} ({})", provider, account_identifier)
            }
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::CreditCard => write!(f, "Credit Card"),
            PaymentType::Digital => write!(f, "Digital"),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Successful => write!(f, "Successful"),
            PaymentStatus::Failed => write!(f, "Failed"),
            PaymentStatus::Pending => write!(f, "Pending"),
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Visa => write!(f, "Visa"),
            CardType::MasterCard => write!(f, "MasterCard"),
            CardType::Amex => write!(f, "Amex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_masks_card_number() {
        let payment = Payment {
            id: 2001,
            booking_id: 1001,
            paid_at: Utc::now(),
            status: PaymentStatus::Successful,
            refund: None,
            method: PaymentMethod::CreditCard {
                card_number: "4111111111119876".to_string(),
                expiry_date: "12/27".to_string(),
                card_type: CardType::Visa,
            },
        };
        assert_eq!(payment.payment_type(), PaymentType::CreditCard);
        assert_eq!(payment.summary(), "Visa ************9876");
        assert!(!payment.is_refunded());
    }
}
