//! # Error Types
//!
//! Structured error types for beam_core. These errors carry enough context
//! to be handled programmatically: every variant names the offending field
//! or catalog entry rather than wrapping a bare string.
//!
//! Two conditions deliberately do **not** appear here:
//!
//! - A zero denominator in a slenderness ratio (ry = 0, tw = 0, ...) is not
//!   an error. The ratio degrades to `f64::INFINITY`, which routes the
//!   capacity classifier into its most conservative branch.
//! - The elastic web-buckling regime is not an error either. It yields a
//!   zero capacity flagged as beyond the engine's scope on the result itself.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CheckError, CheckResult};
//!
//! fn validate_span(span_cm: f64) -> CheckResult<()> {
//!     if span_cm <= 0.0 {
//!         return Err(CheckError::InvalidInput {
//!             field: "span_cm".to_string(),
//!             value: span_cm.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Structured error type for verification operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// the catalog optimizer to pattern-match on validation failures and skip
/// the offending entry instead of aborting a batch run.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CheckError {
    /// A section property is missing, non-numeric, or non-positive
    #[error("Invalid section property '{field}': {value} - {reason}")]
    PropertyInvalid {
        field: String,
        value: String,
        reason: String,
    },

    /// A beam, load, material or limit input is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Section not found in the catalog
    #[error("Section not found: {label}")]
    SectionNotFound { label: String },

    /// Catalog loading error
    #[error("Catalog error: {operation} on '{path}' - {reason}")]
    CatalogError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CheckError {
    /// Create a PropertyInvalid error
    pub fn property_invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::PropertyInvalid {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a PropertyInvalid error for a field that was not supplied
    pub fn property_missing(field: impl Into<String>) -> Self {
        CheckError::PropertyInvalid {
            field: field.into(),
            value: "(absent)".to_string(),
            reason: "Required section property is missing".to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(label: impl Into<String>) -> Self {
        CheckError::SectionNotFound {
            label: label.into(),
        }
    }

    /// Create a CatalogError
    pub fn catalog_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::CatalogError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for validation failures the batch optimizer recovers from by
    /// skipping the entry
    pub fn is_skippable(&self) -> bool {
        matches!(self, CheckError::PropertyInvalid { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckError::PropertyInvalid { .. } => "PROPERTY_INVALID",
            CheckError::InvalidInput { .. } => "INVALID_INPUT",
            CheckError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CheckError::CatalogError { .. } => "CATALOG_ERROR",
            CheckError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CheckError::property_invalid("tw_cm", "0", "Web thickness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CheckError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CheckError::property_missing("zx_cm3").error_code(),
            "PROPERTY_INVALID"
        );
        assert_eq!(
            CheckError::section_not_found("W200X15").error_code(),
            "SECTION_NOT_FOUND"
        );
    }

    #[test]
    fn test_skippable_classification() {
        assert!(CheckError::property_missing("area_cm2").is_skippable());
        assert!(!CheckError::invalid_input("span_cm", "-1", "negative").is_skippable());
    }

    #[test]
    fn test_error_display_names_field() {
        let error = CheckError::property_invalid("iy_cm4", "-4.0", "must be positive");
        let message = format!("{}", error);
        assert!(message.contains("iy_cm4"));
        assert!(message.contains("-4.0"));
    }
}
