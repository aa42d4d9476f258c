//! Domain model for emotion records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Active/soft-deleted flag, persisted as exactly `"Y"` or `"N"`
///
/// Soft-delete is modeled as flipping this flag to `N`; rows are never
/// physically removed, and an explicit update back to `Y` reactivates a
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseYn {
    Y,
    N,
}

impl UseYn {
    /// The persisted one-character representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UseYn::Y => "Y",
            UseYn::N => "N",
        }
    }

    /// Parse the persisted representation; anything but `"Y"`/`"N"` is rejected
    pub fn parse(value: &str) -> Option<UseYn> {
        match value {
            "Y" => Some(UseYn::Y),
            "N" => Some(UseYn::N),
            _ => None,
        }
    }
}

impl Default for UseYn {
    fn default() -> Self {
        UseYn::Y
    }
}

/// One emotion entry row
///
/// `id` is assigned by the store at creation and never reused or mutated.
/// `reg_dtm` is set once at creation; `modi_dtm` is refreshed by every
/// update, patch, and soft-delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRecord {
    /// Store-assigned identifier
    pub id: i64,

    /// Free-text entry body (1–1000 characters)
    pub content: String,

    /// Optional topic label (≤100 characters)
    pub subject: Option<String>,

    /// Active flag; `N` means soft-deleted
    pub use_yn: UseYn,

    /// Creation timestamp (immutable)
    pub reg_dtm: DateTime<Utc>,

    /// Last-modification timestamp
    pub modi_dtm: DateTime<Utc>,
}

impl EmotionRecord {
    /// Check if this record has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.use_yn == UseYn::N
    }
}
