//! # nest-upload
//!
//! Upload admission gate.
//!
//! Validates a candidate file's metadata before any bytes are streamed to
//! the object store. Every policy rejection is a [`ValidationVerdict`]
//! value with a reason code — an error from this crate always means the
//! caller passed malformed input, never that an upload was merely refused.
//!
//! ## Modules
//!
//! - [`rules`] — per-category MIME/size tables and the extension block-list
//! - [`safety`] — banned-keyword and pattern screening
//! - [`guard`] — the ordered admission pipeline
//! - [`quota`] — plan-scaled aggregate storage quotas
//!
//! [`ValidationVerdict`]: nest_types::upload::ValidationVerdict

pub mod guard;
pub mod quota;
pub mod rules;
pub mod safety;

/// Error types for upload validation.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// A required candidate field is absent or empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// The offending field name.
        field: &'static str,
    },
}

/// Convenience result type for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;
