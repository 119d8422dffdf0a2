//! The ordered admission pipeline.
//!
//! Stages run cheapest-and-most-dangerous first; the first failing stage
//! fixes the rejection reason and later stages never run:
//!
//! 1. Structural sanity (null bytes, path traversal, double extensions,
//!    forbidden characters)
//! 2. Extension block-list
//! 3. Category resolution
//! 4. Size ceiling
//! 5. MIME/category consistency
//! 6. Content-safety screening (most expensive, policy not security, so it
//!    runs last)

use nest_types::upload::{RejectReason, UploadCandidate, ValidationVerdict};

use crate::rules::{category_rules, extension, CeilingTable, BLOCKED_EXTENSIONS};
use crate::safety::scan_text;
use crate::{Result, UploadError};

/// Characters never accepted in a file name.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Admission pipeline configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuardConfig {
    /// Which per-file size ceiling table applies.
    pub ceilings: CeilingTable,
}

/// Validate a candidate with the standard (plan-independent) ceilings.
///
/// # Errors
///
/// - [`UploadError::MissingField`] if `file_name` or `declared_mime` is
///   empty. Every policy rejection is a verdict, never an error.
pub fn validate(candidate: &UploadCandidate) -> Result<ValidationVerdict> {
    validate_with(candidate, &GuardConfig::default())
}

/// Validate a candidate against an explicit configuration.
///
/// # Errors
///
/// - [`UploadError::MissingField`] if `file_name` or `declared_mime` is
///   empty
pub fn validate_with(
    candidate: &UploadCandidate,
    config: &GuardConfig,
) -> Result<ValidationVerdict> {
    if candidate.file_name.is_empty() {
        return Err(UploadError::MissingField { field: "file_name" });
    }
    if candidate.declared_mime.is_empty() {
        return Err(UploadError::MissingField {
            field: "declared_mime",
        });
    }

    let verdict = run_pipeline(candidate, config);
    match verdict.reason {
        None => tracing::debug!(
            file_name = %candidate.file_name,
            category = candidate.claimed_category.as_str(),
            size = candidate.size_bytes,
            "upload admitted"
        ),
        Some(reason) => tracing::warn!(
            file_name = %candidate.file_name,
            category = candidate.claimed_category.as_str(),
            ?reason,
            "upload rejected"
        ),
    }
    Ok(verdict)
}

fn run_pipeline(candidate: &UploadCandidate, config: &GuardConfig) -> ValidationVerdict {
    // Stage 1: structural sanity.
    if candidate.file_name.contains('\0') || candidate.declared_mime.contains('\0') {
        return ValidationVerdict::reject(RejectReason::InvalidCharacters);
    }
    if candidate.file_name.contains("../") || candidate.file_name.contains("..\\") {
        return ValidationVerdict::reject(RejectReason::PathTraversal);
    }
    if candidate.file_name.split('.').count() > 2 {
        return ValidationVerdict::reject(RejectReason::DoubleExtension);
    }
    if candidate.file_name.contains(FORBIDDEN_CHARS) {
        return ValidationVerdict::reject(RejectReason::InvalidCharacters);
    }

    // Stage 2: extension block-list.
    let ext = extension(&candidate.file_name);
    if let Some(ext) = &ext {
        if BLOCKED_EXTENSIONS.contains(&ext.as_str()) {
            return ValidationVerdict::reject(RejectReason::BlockedExtension);
        }
    }

    // Stage 3: category resolution.
    let Some(rules) = category_rules(candidate.claimed_category) else {
        return ValidationVerdict::reject(RejectReason::UnsupportedCategory);
    };

    // Stage 4: size ceiling. Every category with rules has a ceiling in
    // both stock tables.
    match config.ceilings.ceiling_bytes(candidate.claimed_category) {
        Some(ceiling) if candidate.size_bytes > ceiling => {
            return ValidationVerdict::reject(RejectReason::FileTooLarge);
        }
        Some(_) => {}
        None => return ValidationVerdict::reject(RejectReason::UnsupportedCategory),
    }

    // Stage 5: MIME/category consistency.
    let mime = candidate.declared_mime.to_lowercase();
    if !rules.allowed_mimes.contains(&mime.as_str()) {
        return ValidationVerdict::reject(RejectReason::TypeMismatch);
    }

    // Stage 6: content safety.
    if let Some(reason) = scan_text(&candidate.file_name) {
        return ValidationVerdict::reject(reason);
    }

    ValidationVerdict::admit()
}
