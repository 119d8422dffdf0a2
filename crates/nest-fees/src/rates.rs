//! Fee-rate tables.
//!
//! One table shared by the client-estimate path and the server-settlement
//! path. The original edge functions carried their own copies of these
//! constants; a single table eliminates the drift.
//!
//! All rates are basis points (1 bps = 0.01%) so the split arithmetic stays
//! in integers.

use nest_types::listing::{ContentCategory, SellerPlan};

/// Default platform fee for free-plan sellers (10%).
pub const DEFAULT_PLATFORM_FEE_BPS: u64 = 1_000;

/// Reduced platform fee for recurring/written categories (5%).
pub const REDUCED_PLATFORM_FEE_BPS: u64 = 500;

/// PayPal's variable transaction rate (3.49%).
pub const PAYPAL_RATE_BPS: u64 = 349;

/// PayPal's fixed per-transaction fee in cents ($0.49).
pub const PAYPAL_FIXED_FEE_CENTS: u64 = 49;

/// Platform fee rate in basis points for a category and plan.
///
/// Pro sellers pay no per-sale platform fee (their fixed subscription is
/// billed outside this engine). Free sellers pay 10%, reduced to 5% for
/// memberships and written content.
pub fn platform_fee_bps(category: ContentCategory, plan: SellerPlan) -> u64 {
    match plan {
        SellerPlan::Pro => 0,
        SellerPlan::Free => match category {
            ContentCategory::Membership | ContentCategory::Blog => REDUCED_PLATFORM_FEE_BPS,
            ContentCategory::Video
            | ContentCategory::Audio
            | ContentCategory::DigitalProduct
            | ContentCategory::Image
            | ContentCategory::Chat
            | ContentCategory::Booking => DEFAULT_PLATFORM_FEE_BPS,
        },
    }
}
