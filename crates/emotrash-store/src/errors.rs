//! Error handling for emotrash-store
//!
//! Wraps emotrash-core's EmotionError with store-specific helpers.

use emotrash_core::EmotionError;

pub use emotrash_core::Result;

/// Create a persistence error from rusqlite::Error
///
/// Driver detail goes into the message for logging; callers surface the
/// variant to clients as an opaque server error.
pub fn from_rusqlite(op: &'static str, err: rusqlite::Error) -> EmotionError {
    EmotionError::Persistence {
        op,
        message: err.to_string(),
    }
}
