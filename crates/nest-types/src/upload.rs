//! Upload value objects: candidate files, verdicts, usage snapshots.

use serde::{Deserialize, Serialize};

use crate::listing::ContentCategory;

/// Metadata for a file awaiting admission, before any bytes are streamed
/// to the object store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct UploadCandidate {
    pub file_name: String,
    /// MIME type as declared by the client.
    pub declared_mime: String,
    pub size_bytes: u64,
    /// The listing category the uploader claims this file belongs to.
    pub claimed_category: ContentCategory,
}

/// Why an upload was turned away.
///
/// A closed set of expected, user-correctable rejections — returned in a
/// verdict, never raised as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    PathTraversal,
    DoubleExtension,
    InvalidCharacters,
    BlockedExtension,
    UnsupportedCategory,
    FileTooLarge,
    TypeMismatch,
    ProhibitedContent,
}

impl RejectReason {
    /// User-facing error string shown by the upload form.
    pub fn user_message(&self) -> &'static str {
        match self {
            RejectReason::PathTraversal => "Invalid file name",
            RejectReason::DoubleExtension => "Multiple file extensions not allowed",
            RejectReason::InvalidCharacters => "File name contains invalid characters",
            RejectReason::BlockedExtension => "File type not allowed",
            RejectReason::UnsupportedCategory => "Unsupported content type",
            RejectReason::FileTooLarge => "File exceeds the size limit for its category",
            RejectReason::TypeMismatch => "File type does not match the claimed category",
            RejectReason::ProhibitedContent => {
                "Content contains inappropriate or illegal material"
            }
        }
    }
}

/// Outcome of the upload admission pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct ValidationVerdict {
    pub admitted: bool,
    /// Set exactly when `admitted` is false.
    pub reason: Option<RejectReason>,
}

impl ValidationVerdict {
    /// Verdict admitting the candidate.
    pub fn admit() -> Self {
        ValidationVerdict {
            admitted: true,
            reason: None,
        }
    }

    /// Verdict rejecting the candidate for the given reason.
    pub fn reject(reason: RejectReason) -> Self {
        ValidationVerdict {
            admitted: false,
            reason: Some(reason),
        }
    }
}

/// A seller's current storage consumption, as read from the usage table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct StorageUsage {
    /// Total bytes already stored.
    pub total_bytes: u64,
    /// Number of files already stored.
    pub file_count: u32,
}
