//! Request DTOs matching the wire field contract
//!
//! All request bodies are maps of optional strings (`content`, `subject`,
//! `useYn`); which fields are required depends on the operation, so
//! requiredness is enforced by `validate`, not by the deserializer.

use serde::Deserialize;

use crate::errors::{EmotionError, Result};

/// Body of a create request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRequest {
    pub content: Option<String>,
    pub subject: Option<String>,
}

/// Body of a full-update (replace) request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceRequest {
    pub content: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "useYn")]
    pub use_yn: Option<String>,
}

/// Body of a partial-update (patch) request
///
/// Absent fields are left untouched by the patch; present fields are
/// validated and written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchRequest {
    pub content: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "useYn")]
    pub use_yn: Option<String>,
}

impl PatchRequest {
    /// Whether the patch carries no optional fields at all
    ///
    /// Such a patch is still a valid statement: a timestamp-only touch.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.subject.is_none() && self.use_yn.is_none()
    }
}

/// Optional list filters, each matched only when present and non-blank
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    pub content: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "useYn")]
    pub use_yn: Option<String>,
}

/// Whitelisted sortable columns, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Content,
    Subject,
    RegDtm,
    ModiDtm,
}

impl SortColumn {
    /// The column name emitted into the ORDER BY clause
    pub fn column_name(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Content => "content",
            SortColumn::Subject => "subject",
            SortColumn::RegDtm => "reg_dtm",
            SortColumn::ModiDtm => "modi_dtm",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A parsed, whitelisted `"column,direction"` sort parameter
///
/// Only enumerated column/direction pairs ever reach the generated SQL;
/// the raw parameter text is never interpolated into a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Sort {
    /// Parse a `"column,direction"` parameter against the whitelist
    ///
    /// Splits on the first comma; both halves match case-insensitively
    /// against the wire field names (`regDtm`, `modiDtm`, ...) and
    /// `asc`/`desc`. Anything else fails `InvalidEnum`.
    ///
    /// # Errors
    ///
    /// - `InvalidEnum` — missing comma, unknown column, or unknown direction
    pub fn parse(value: &str) -> Result<Sort> {
        let (column, direction) = value.split_once(',').ok_or(EmotionError::InvalidEnum {
            field: "sort",
            reason: "must be formatted as 'column,direction'",
        })?;

        let column = match column.trim().to_ascii_lowercase().as_str() {
            "id" => SortColumn::Id,
            "content" => SortColumn::Content,
            "subject" => SortColumn::Subject,
            "regdtm" => SortColumn::RegDtm,
            "modidtm" => SortColumn::ModiDtm,
            _ => {
                return Err(EmotionError::InvalidEnum {
                    field: "sort",
                    reason: "column must be one of id, content, subject, regDtm, modiDtm",
                })
            }
        };

        let direction = match direction.trim().to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => {
                return Err(EmotionError::InvalidEnum {
                    field: "sort",
                    reason: "direction must be 'asc' or 'desc'",
                })
            }
        };

        Ok(Sort { column, direction })
    }
}
