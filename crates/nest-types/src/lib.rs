//! # nest-types
//!
//! Shared domain types for the LinkNest core engines.
//!
//! The checkout/webhook glue and the upload edge functions exchange these
//! structures with the TypeScript frontend as JSON; every public type
//! derives `serde` and exports a TS binding.

pub mod checkout;
pub mod listing;
pub mod upload;

/// Minor currency units per dollar (all amounts are integer cents).
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Bytes per mebibyte.
pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Bytes per gibibyte.
pub const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Minimum one-time purchase price in cents ($0.50).
pub const MIN_ONE_TIME_PRICE_CENTS: u64 = 50;

/// Minimum subscription price in cents ($1.00).
pub const MIN_SUBSCRIPTION_PRICE_CENTS: u64 = 100;

/// Error for strings that do not name a known enum value.
///
/// Raised at the JSON boundary when an edge function hands the core an
/// unrecognized category, plan, or rail — a caller bug, never retried.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Not a known content category.
    #[error("unknown content category: {0}")]
    UnknownCategory(String),

    /// Not a known seller plan.
    #[error("unknown seller plan: {0}")]
    UnknownPlan(String),

    /// Not a known payment rail.
    #[error("unknown payment rail: {0}")]
    UnknownRail(String),
}

/// Convenience result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
