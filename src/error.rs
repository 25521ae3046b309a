//! Error types for rasterization operations.

use thiserror::Error;

/// Result type alias using [`RasterError`].
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors that can occur while rasterizing a shape.
///
/// Every error is raised before the first point is produced, except for the
/// point transforms that consume a caller-provided sequence; those fail at
/// the malformed item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// An argument failed a type or range precondition.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending argument (e.g. `width`, `points[2]`).
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The arguments are well-formed but ask for a modifier that is not
    /// implemented (thick lines, filled circles).
    #[error("{feature} is not supported")]
    Unsupported {
        /// The requested feature.
        feature: String,
    },
}

impl RasterError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RasterError::Validation { field: field.into(), reason: reason.into() }
    }

    pub(crate) fn unsupported(feature: impl Into<String>) -> Self {
        RasterError::Unsupported { feature: feature.into() }
    }
}

/// Reject a truncated size or count below `min`.
pub(crate) fn require_at_least(field: &str, value: i32, min: i32) -> Result<()> {
    if value < min {
        return Err(RasterError::validation(field, format!("must be at least {}, got {}", min, value)));
    }
    Ok(())
}
