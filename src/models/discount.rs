//! Discount model and price reduction

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use crate::utils::errors::{GrandPrixError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    /// Percentage of the price taken off, 0 to 100
    pub percentage: Decimal,
    /// Flat amount taken off on top of the percentage
    pub amount: Decimal,
    pub code: String,
    /// Largest reduction this discount may ever grant
    pub max_cap: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDiscountRequest {
    pub code: String,
    pub percentage: Decimal,
    pub amount: Decimal,
    pub max_cap: Decimal,
}

impl Discount {
    /// Reduction granted on `original_price`, before flooring the result at zero
    pub fn reduction(&self, original_price: Decimal) -> Decimal {
        let percentage_component = original_price * self.percentage / Decimal::ONE_HUNDRED;
        let raw = percentage_component + self.amount;
        raw.min(self.max_cap)
    }

    /// Price after the discount. Never negative and never more than
    /// `max_cap` below `original_price`.
    pub fn apply(&self, original_price: Decimal) -> Decimal {
        (original_price - self.reduction(original_price)).max(Decimal::ZERO)
    }

    /// Range checks performed when an admin creates or edits a discount
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(GrandPrixError::Validation("Discount code is required".to_string()));
        }
        if self.max_cap <= Decimal::ZERO {
            return Err(GrandPrixError::Validation("Maximum amount must be positive".to_string()));
        }
        if self.percentage < Decimal::ZERO || self.percentage > Decimal::ONE_HUNDRED {
            return Err(GrandPrixError::Validation("Percentage must be between 0 and 100".to_string()));
        }
        if self.amount < Decimal::ZERO {
            return Err(GrandPrixError::Validation("Amount cannot be negative".to_string()));
        }
        if self.percentage.is_zero() && self.amount.is_zero() {
            return Err(GrandPrixError::Validation("Discount must take off a percentage or an amount".to_string()));
        }
        Ok(())
    }

    pub fn apply_update(&mut self, request: UpdateDiscountRequest) {
        self.code = request.code;
        self.percentage = request.percentage;
        self.amount = request.amount;
        self.max_cap = request.max_cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn discount(percentage: i64, amount: i64, max_cap: i64) -> Discount {
        Discount {
            id: 1,
            percentage: Decimal::from(percentage),
            amount: Decimal::from(amount),
            code: "EARLY10".to_string(),
            max_cap: Decimal::from(max_cap),
        }
    }

    #[test]
    fn test_percentage_below_cap() {
        let early = discount(10, 0, 100);
        assert_eq!(early.apply(Decimal::from(500)), Decimal::from(450));
    }

    #[test]
    fn test_percentage_capped() {
        let early = discount(10, 0, 100);
        assert_eq!(early.apply(Decimal::from(2000)), Decimal::from(1900));
    }

    #[test]
    fn test_flat_amount() {
        let flat = discount(0, 15, 15);
        assert_eq!(flat.apply(Decimal::from(100)), Decimal::from(85));
    }

    #[test]
    fn test_flat_amount_never_goes_negative() {
        let flat = discount(0, 50, 500);
        assert_eq!(flat.apply(Decimal::from(20)), Decimal::ZERO);
    }

    #[test]
    fn test_validate() {
        assert!(discount(10, 0, 100).validate().is_ok());
        assert_matches!(discount(101, 0, 100).validate(), Err(GrandPrixError::Validation(_)));
        assert_matches!(discount(10, 0, 0).validate(), Err(GrandPrixError::Validation(_)));
        assert_matches!(discount(0, 0, 10).validate(), Err(GrandPrixError::Validation(_)));
        assert_matches!(discount(0, -5, 10).validate(), Err(GrandPrixError::Validation(_)));

        let mut blank = discount(10, 0, 100);
        blank.code = String::new();
        assert_matches!(blank.validate(), Err(GrandPrixError::Validation(_)));
    }

    proptest! {
        #[test]
        fn prop_discount_never_raises_price(
            price_cents in 0i64..10_000_000,
            percentage in 0i64..=100,
            amount_cents in 0i64..1_000_000,
            cap_cents in 1i64..1_000_000,
        ) {
            let price = Decimal::new(price_cents, 2);
            let d = Discount {
                id: 7,
                percentage: Decimal::from(percentage),
                amount: Decimal::new(amount_cents, 2),
                code: "PROP".to_string(),
                max_cap: Decimal::new(cap_cents, 2),
            };

            let discounted = d.apply(price);
            prop_assert!(discounted <= price);
            prop_assert!(discounted >= Decimal::ZERO);
            prop_assert!(price - discounted <= d.max_cap);
        }
    }
}
