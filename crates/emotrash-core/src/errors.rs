//! Error taxonomy for the emotion record service
//!
//! Validation failures carry the specific per-field message the caller sees;
//! store failures carry operation context for logging and are surfaced to
//! clients as opaque server errors.

use thiserror::Error;

/// Result type alias using EmotionError
pub type Result<T> = std::result::Result<T, EmotionError>;

/// Comprehensive error taxonomy for record operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmotionError {
    // ===== Client-input validation =====
    /// A required field is absent or blank after trimming
    #[error("{field} is a required field")]
    MissingField { field: &'static str },

    /// A field exceeds its maximum character count
    #[error("{field} must not exceed {limit} characters")]
    TooLong { field: &'static str, limit: usize },

    /// A field is present but outside its enumerated value set
    #[error("{field} {reason}")]
    InvalidEnum {
        field: &'static str,
        reason: &'static str,
    },

    /// Point lookup matched no row (a client-input error, not a server fault)
    #[error("no record found for id {id}")]
    NotFound { id: i64 },

    // ===== Store-side failures =====
    /// A mutating statement affected zero rows
    ///
    /// For replace/patch/soft-delete this conflates "no such id" with a
    /// genuine failed write; the service cannot tell them apart.
    #[error("{op} affected no rows")]
    WriteFailed { op: &'static str },

    /// Connection or driver failure at the statement boundary
    #[error("storage failure in {op}: {message}")]
    Persistence { op: &'static str, message: String },
}

impl EmotionError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            EmotionError::MissingField { .. } => "ERR_MISSING_FIELD",
            EmotionError::TooLong { .. } => "ERR_TOO_LONG",
            EmotionError::InvalidEnum { .. } => "ERR_INVALID_ENUM",
            EmotionError::NotFound { .. } => "ERR_NOT_FOUND",
            EmotionError::WriteFailed { .. } => "ERR_WRITE_FAILED",
            EmotionError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }

    /// Whether this error is caused by client input
    ///
    /// Client errors are reported back with their specific message; server
    /// errors are logged in full and reported opaquely.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EmotionError::MissingField { .. }
                | EmotionError::TooLong { .. }
                | EmotionError::InvalidEnum { .. }
                | EmotionError::NotFound { .. }
        )
    }
}
