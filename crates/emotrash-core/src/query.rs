//! Dynamic SQL fragment construction
//!
//! Builds the list/filter SELECT and the partial-update UPDATE whose
//! clauses vary with which optional fields are present. Fragments carry
//! their bind values in the exact order the placeholders were appended, so
//! positional binding stays aligned no matter which fields participate.
//! All user-supplied values travel as binds; the only text spliced into a
//! statement is from the enumerated sort whitelist.

use crate::requests::{ListFilter, PatchRequest, Sort};

/// A single positional bind value
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

/// A SQL statement plus its ordered bind values
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Parameters of a list operation
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filter: ListFilter,
    /// 1-indexed page number; values below 1 are clamped to 1
    pub page: i64,
    /// Page size; values below 1 are clamped to 1
    pub size: i64,
    /// Parsed sort, or `None` for the default `id DESC`
    pub sort: Option<Sort>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: ListFilter::default(),
            page: 1,
            size: 10,
            sort: None,
        }
    }
}

/// A filter participates only when present and non-blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Build the filtered, sorted, paginated list SELECT
///
/// WHERE predicates accumulate in the fixed order content → subject →
/// useYn: substring match (`LIKE '%' || ? || '%'`) for the text filters,
/// equality for useYn. Absent or blank filters contribute no predicate and
/// no bind. ORDER BY comes from the whitelisted sort (default `id DESC`),
/// then `LIMIT ?` and `OFFSET ?` with offset = size × (page − 1). Binds are
/// emitted in predicate order, then limit, then offset.
pub fn build_list_query(query: &ListQuery) -> SqlFragment {
    let mut sql = String::from(
        "SELECT id, content, subject, use_yn, reg_dtm, modi_dtm FROM emotions WHERE 1=1",
    );
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(content) = present(&query.filter.content) {
        sql.push_str(&format!(" AND content LIKE '%' || ?{} || '%'", binds.len() + 1));
        binds.push(BindValue::Text(content.to_string()));
    }
    if let Some(subject) = present(&query.filter.subject) {
        sql.push_str(&format!(" AND subject LIKE '%' || ?{} || '%'", binds.len() + 1));
        binds.push(BindValue::Text(subject.to_string()));
    }
    if let Some(use_yn) = present(&query.filter.use_yn) {
        sql.push_str(&format!(" AND use_yn = ?{}", binds.len() + 1));
        binds.push(BindValue::Text(use_yn.to_string()));
    }

    match &query.sort {
        Some(sort) => {
            sql.push_str(&format!(
                " ORDER BY {} {}",
                sort.column.column_name(),
                sort.direction.keyword()
            ));
        }
        None => sql.push_str(" ORDER BY id DESC"),
    }

    let page = query.page.max(1);
    let size = query.size.max(1);

    sql.push_str(&format!(" LIMIT ?{}", binds.len() + 1));
    binds.push(BindValue::Int(size));
    sql.push_str(&format!(" OFFSET ?{}", binds.len() + 1));
    binds.push(BindValue::Int(size * (page - 1)));

    tracing::debug!(sql = %sql, binds = binds.len(), "built list query");
    SqlFragment { sql, binds }
}

/// Build the partial-update UPDATE for a patch request
///
/// Always refreshes `modi_dtm`, then appends one SET assignment per
/// present field in the fixed order content → useYn → subject (this order
/// is independent of validation order and must match the bind order), and
/// closes with the id equality predicate as the final bind. A patch with
/// no optional fields is a valid timestamp-only touch, not an error.
pub fn build_patch_query(id: i64, request: &PatchRequest) -> SqlFragment {
    let mut sql = String::from("UPDATE emotions SET modi_dtm = CURRENT_TIMESTAMP");
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(content) = &request.content {
        sql.push_str(&format!(", content = ?{}", binds.len() + 1));
        binds.push(BindValue::Text(content.clone()));
    }
    if let Some(use_yn) = &request.use_yn {
        sql.push_str(&format!(", use_yn = ?{}", binds.len() + 1));
        binds.push(BindValue::Text(use_yn.clone()));
    }
    if let Some(subject) = &request.subject {
        sql.push_str(&format!(", subject = ?{}", binds.len() + 1));
        binds.push(BindValue::Text(subject.clone()));
    }

    sql.push_str(&format!(" WHERE id = ?{}", binds.len() + 1));
    binds.push(BindValue::Int(id));

    tracing::debug!(sql = %sql, binds = binds.len(), "built patch query");
    SqlFragment { sql, binds }
}
