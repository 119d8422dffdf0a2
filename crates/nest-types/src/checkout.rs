//! Checkout value objects: sale context and fee breakdown.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing::{ContentCategory, SellerPlan};
use crate::ParseError;

/// Payment rail carrying a sale.
///
/// The two rails settle processor fees differently: PayPal deducts its cut
/// out-of-band, Stripe deducts before the destination transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentRail {
    Paypal,
    Stripe,
}

impl FromStr for PaymentRail {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paypal" => Ok(PaymentRail::Paypal),
            "stripe" => Ok(PaymentRail::Stripe),
            other => Err(ParseError::UnknownRail(other.to_string())),
        }
    }
}

/// Immutable context for one sale, constructed fresh per computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct SaleContext {
    /// Gross sale amount in integer cents.
    pub gross_cents: u64,
    pub category: ContentCategory,
    pub seller_plan: SellerPlan,
    pub rail: PaymentRail,
}

/// How a gross amount splits between platform, processor, and seller.
///
/// Conservation depends on the rail: on PayPal,
/// `platform_fee_cents + processor_fee_cents + net_payout_cents` equals the
/// gross; on Stripe the processor fee is opaque to the platform and reported
/// as zero, so `platform_fee_cents + net_payout_cents` equals the gross.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct FeeBreakdown {
    /// The marketplace's cut, in cents.
    pub platform_fee_cents: u64,
    /// The payment rail's transaction cost, in cents (estimate on PayPal,
    /// zero on Stripe).
    pub processor_fee_cents: u64,
    /// Amount transferred to the seller after deductions, in cents.
    pub net_payout_cents: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_parse() {
        assert_eq!("paypal".parse::<PaymentRail>().expect("parse"), PaymentRail::Paypal);
        assert_eq!("stripe".parse::<PaymentRail>().expect("parse"), PaymentRail::Stripe);
        assert!("venmo".parse::<PaymentRail>().is_err());
    }

    #[test]
    fn test_sale_context_json() {
        let ctx = SaleContext {
            gross_cents: 1000,
            category: ContentCategory::DigitalProduct,
            seller_plan: SellerPlan::Free,
            rail: PaymentRail::Paypal,
        };
        let json = serde_json::to_string(&ctx).expect("serialize");
        let back: SaleContext = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ctx);
    }
}
