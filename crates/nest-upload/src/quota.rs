//! Plan-scaled aggregate storage quotas.
//!
//! Per-file ceilings live in [`crate::rules`]; this module bounds a
//! seller's total footprint. The caller supplies the current usage snapshot
//! (the engine does no I/O) and the plan decides the limits: free sellers
//! get 2 GiB and 5 files, pro sellers 50 GiB with no file-count cap.

use nest_types::listing::SellerPlan;
use nest_types::upload::StorageUsage;
use nest_types::BYTES_PER_GIB;
use serde::{Deserialize, Serialize};

/// Aggregate storage limit for free-plan sellers (2 GiB).
pub const FREE_STORAGE_LIMIT_BYTES: u64 = 2 * BYTES_PER_GIB;

/// Aggregate storage limit for pro-plan sellers (50 GiB).
pub const PRO_STORAGE_LIMIT_BYTES: u64 = 50 * BYTES_PER_GIB;

/// File-count limit for free-plan sellers.
pub const FREE_FILE_COUNT_LIMIT: u32 = 5;

/// Why an upload was refused on quota grounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaRejection {
    /// The upload would push total storage past the plan limit.
    StorageExceeded,
    /// The seller already holds the plan's maximum number of files.
    FileCountExceeded,
}

/// Outcome of a quota check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaVerdict {
    pub allowed: bool,
    /// Set exactly when `allowed` is false.
    pub reason: Option<QuotaRejection>,
}

impl QuotaVerdict {
    fn allow() -> Self {
        QuotaVerdict {
            allowed: true,
            reason: None,
        }
    }

    fn refuse(reason: QuotaRejection) -> Self {
        QuotaVerdict {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Aggregate storage limit in bytes for a plan.
pub fn storage_limit_bytes(plan: SellerPlan) -> u64 {
    match plan {
        SellerPlan::Free => FREE_STORAGE_LIMIT_BYTES,
        SellerPlan::Pro => PRO_STORAGE_LIMIT_BYTES,
    }
}

/// File-count limit for a plan, `None` meaning unlimited.
pub fn file_count_limit(plan: SellerPlan) -> Option<u32> {
    match plan {
        SellerPlan::Free => Some(FREE_FILE_COUNT_LIMIT),
        SellerPlan::Pro => None,
    }
}

/// Check whether a seller may add `incoming_bytes` of storage.
///
/// Pure over the supplied snapshot: same usage, size, and plan always yield
/// the same verdict.
pub fn check(usage: &StorageUsage, incoming_bytes: u64, plan: SellerPlan) -> QuotaVerdict {
    let projected = usage.total_bytes.saturating_add(incoming_bytes);
    if projected > storage_limit_bytes(plan) {
        tracing::warn!(
            total = usage.total_bytes,
            incoming = incoming_bytes,
            plan = plan.as_str(),
            "storage quota exceeded"
        );
        return QuotaVerdict::refuse(QuotaRejection::StorageExceeded);
    }

    if let Some(limit) = file_count_limit(plan) {
        if usage.file_count >= limit {
            tracing::warn!(
                file_count = usage.file_count,
                limit,
                plan = plan.as_str(),
                "file count quota exceeded"
            );
            return QuotaVerdict::refuse(QuotaRejection::FileCountExceeded);
        }
    }

    QuotaVerdict::allow()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_usage_allowed() {
        let verdict = check(&StorageUsage::default(), 1024, SellerPlan::Free);
        assert!(verdict.allowed);
        assert!(verdict.reason.is_none());
    }

    #[test]
    fn test_free_storage_boundary() {
        let usage = StorageUsage {
            total_bytes: FREE_STORAGE_LIMIT_BYTES - 100,
            file_count: 1,
        };
        assert!(check(&usage, 100, SellerPlan::Free).allowed);
        assert_eq!(
            check(&usage, 101, SellerPlan::Free).reason,
            Some(QuotaRejection::StorageExceeded)
        );
    }

    #[test]
    fn test_free_file_count_limit() {
        let usage = StorageUsage {
            total_bytes: 1024,
            file_count: FREE_FILE_COUNT_LIMIT,
        };
        assert_eq!(
            check(&usage, 1024, SellerPlan::Free).reason,
            Some(QuotaRejection::FileCountExceeded)
        );

        let under = StorageUsage {
            total_bytes: 1024,
            file_count: FREE_FILE_COUNT_LIMIT - 1,
        };
        assert!(check(&under, 1024, SellerPlan::Free).allowed);
    }

    #[test]
    fn test_pro_has_no_file_count_limit() {
        let usage = StorageUsage {
            total_bytes: 1024,
            file_count: 10_000,
        };
        assert!(check(&usage, 1024, SellerPlan::Pro).allowed);
    }

    #[test]
    fn test_pro_storage_limit_still_applies() {
        let usage = StorageUsage {
            total_bytes: PRO_STORAGE_LIMIT_BYTES,
            file_count: 3,
        };
        assert_eq!(
            check(&usage, 1, SellerPlan::Pro).reason,
            Some(QuotaRejection::StorageExceeded)
        );
    }

    #[test]
    fn test_incoming_overflow_saturates_to_rejection() {
        let usage = StorageUsage {
            total_bytes: u64::MAX - 10,
            file_count: 0,
        };
        assert_eq!(
            check(&usage, u64::MAX, SellerPlan::Pro).reason,
            Some(QuotaRejection::StorageExceeded)
        );
    }
}
