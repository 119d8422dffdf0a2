//! # nest-fees
//!
//! Fee calculation and payout-split engine.
//!
//! Given a gross sale amount, content category, seller plan, and payment
//! rail, computes the platform fee, the processor fee, and the net payout.
//! The same computation backs the checkout-time estimate shown to sellers
//! and the authoritative transfer amount at webhook settlement.
//!
//! ## Modules
//!
//! - [`rates`] — category→fee-rate tables and processor constants
//! - [`engine`] — the split computation
//! - [`pricing`] — caller-side minimum-price floors

use serde::Serialize;

pub mod engine;
pub mod pricing;
pub mod rates;

/// Error types for fee operations.
///
/// Serializes so the checkout glue can surface it in JSON error responses.
#[derive(Debug, thiserror::Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeError {
    /// Arithmetic overflow or underflow.
    #[error("arithmetic overflow in fee calculation")]
    Overflow,

    /// Price is below the minimum for its billing kind.
    #[error("price {price_cents} below minimum {minimum_cents} cents")]
    BelowMinimum {
        /// The rejected price.
        price_cents: u64,
        /// The floor that applies.
        minimum_cents: u64,
    },
}

/// Convenience result type for fee operations.
pub type Result<T> = std::result::Result<T, FeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_for_the_glue_layer() {
        let err = FeeError::BelowMinimum {
            price_cents: 10,
            minimum_cents: 100,
        };
        let json = serde_json::to_string(&err).expect("serialize");
        assert!(json.contains("\"below_minimum\""));
        assert!(json.contains("\"minimum_cents\":100"));

        let json = serde_json::to_string(&FeeError::Overflow).expect("serialize");
        assert_eq!(json, "\"overflow\"");
    }
}
