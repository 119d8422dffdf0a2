//! Minimum-price floors.
//!
//! Enforced at publish time, before a sale context ever reaches the engine:
//! one-time purchases must be at least $0.50, subscriptions at least $1.00.
//! [`crate::engine::compute`] assumes a floored gross and does not re-check.

use nest_types::listing::BillingKind;
use nest_types::{MIN_ONE_TIME_PRICE_CENTS, MIN_SUBSCRIPTION_PRICE_CENTS};

use crate::{FeeError, Result};

/// The minimum price in cents for a billing kind.
pub fn minimum_price_cents(kind: BillingKind) -> u64 {
    match kind {
        BillingKind::OneTime => MIN_ONE_TIME_PRICE_CENTS,
        BillingKind::Subscription => MIN_SUBSCRIPTION_PRICE_CENTS,
    }
}

/// Validate a listing price against its billing kind's floor.
///
/// # Errors
///
/// - [`FeeError::BelowMinimum`] if the price is under the floor
pub fn validate_price(price_cents: u64, kind: BillingKind) -> Result<()> {
    let minimum_cents = minimum_price_cents(kind);
    if price_cents < minimum_cents {
        return Err(FeeError::BelowMinimum {
            price_cents,
            minimum_cents,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_time_floor_boundary() {
        assert!(validate_price(49, BillingKind::OneTime).is_err());
        validate_price(50, BillingKind::OneTime).expect("at the floor");
        validate_price(51, BillingKind::OneTime).expect("above the floor");
    }

    #[test]
    fn test_subscription_floor_boundary() {
        assert!(validate_price(99, BillingKind::Subscription).is_err());
        validate_price(100, BillingKind::Subscription).expect("at the floor");
    }

    #[test]
    fn test_zero_price_rejected() {
        assert!(validate_price(0, BillingKind::OneTime).is_err());
        assert!(validate_price(0, BillingKind::Subscription).is_err());
    }

    #[test]
    fn test_error_carries_floor() {
        let err = validate_price(10, BillingKind::Subscription)
            .expect_err("below floor must fail");
        assert!(matches!(
            err,
            FeeError::BelowMinimum {
                price_cents: 10,
                minimum_cents: 100,
            }
        ));
    }
}
