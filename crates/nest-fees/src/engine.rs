//! The fee split computation.
//!
//! Pure and deterministic: no I/O, no clock, no randomness. The same
//! [`SaleContext`] always yields the same [`FeeBreakdown`], so the estimate
//! a seller sees before publishing matches the settlement figure to the
//! cent.
//!
//! ## Rail differences
//!
//! - **PayPal** settles its own cut out-of-band; the processor fee here
//!   (3.49% + $0.49) is an estimate for display, and conservation holds as
//!   `platform + processor + net == gross`.
//! - **Stripe** deducts its card fee before the destination transfer, so the
//!   engine has no authority over it; the processor fee is reported as zero
//!   and conservation holds as `platform + net == gross`.
//!
//! ## Preconditions
//!
//! Callers must enforce the minimum-price floor (see
//! [`crate::pricing::validate_price`]) before invoking [`compute`]; the
//! engine assumes an already-floored gross and does not re-check it.

use nest_types::checkout::{FeeBreakdown, PaymentRail, SaleContext};

use crate::rates::{platform_fee_bps, PAYPAL_FIXED_FEE_CENTS, PAYPAL_RATE_BPS};
use crate::{FeeError, Result};

/// Basis points in a whole.
const BPS_SCALE: u64 = 10_000;

/// Multiply an amount in cents by a basis-point rate, rounding half-up on
/// the cent.
fn apply_rate(amount_cents: u64, rate_bps: u64) -> Result<u64> {
    let scaled = amount_cents
        .checked_mul(rate_bps)
        .ok_or(FeeError::Overflow)?;
    let rounded = scaled
        .checked_add(BPS_SCALE / 2)
        .ok_or(FeeError::Overflow)?;
    Ok(rounded / BPS_SCALE)
}

/// Compute how a sale's gross amount splits between platform, processor,
/// and seller.
///
/// # Errors
///
/// - [`FeeError::Overflow`] if the arithmetic overflows `u64`, or if the
///   combined fees would exceed the gross (possible only for amounts below
///   the caller-enforced price floor).
pub fn compute(ctx: &SaleContext) -> Result<FeeBreakdown> {
    let rate = platform_fee_bps(ctx.category, ctx.seller_plan);
    let platform_fee_cents = apply_rate(ctx.gross_cents, rate)?;

    let (processor_fee_cents, net_payout_cents) = match ctx.rail {
        PaymentRail::Paypal => {
            let processor = apply_rate(ctx.gross_cents, PAYPAL_RATE_BPS)?
                .checked_add(PAYPAL_FIXED_FEE_CENTS)
                .ok_or(FeeError::Overflow)?;
            let net = ctx
                .gross_cents
                .checked_sub(platform_fee_cents)
                .and_then(|rest| rest.checked_sub(processor))
                .ok_or(FeeError::Overflow)?;
            (processor, net)
        }
        PaymentRail::Stripe => {
            let net = ctx
                .gross_cents
                .checked_sub(platform_fee_cents)
                .ok_or(FeeError::Overflow)?;
            (0, net)
        }
    };

    tracing::info!(
        gross = ctx.gross_cents,
        category = ctx.category.as_str(),
        plan = ctx.seller_plan.as_str(),
        platform_fee = platform_fee_cents,
        processor_fee = processor_fee_cents,
        net_payout = net_payout_cents,
        "fee split computed"
    );

    Ok(FeeBreakdown {
        platform_fee_cents,
        processor_fee_cents,
        net_payout_cents,
    })
}
