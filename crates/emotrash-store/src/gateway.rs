//! Record Store Gateway
//!
//! Executes parameterized SQL against the `emotions` table and maps rows
//! back to `EmotionRecord`. Dynamic statements (list, patch) are built by
//! the core query builder; everything here is a single statement per call,
//! so atomicity is whatever SQLite guarantees per statement.

use chrono::{DateTime, NaiveDateTime, Utc};
use emotrash_core::{
    build_list_query, build_patch_query, BindValue, EmotionError, EmotionRecord, ListQuery,
    PatchRequest, Result, UseYn,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::errors::from_rusqlite;

/// Timestamp format written by SQLite's CURRENT_TIMESTAMP (UTC)
const DTM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_dtm(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DTM_FORMAT)
        .ok()
        .map(|dtm| dtm.and_utc())
}

/// Map one row of the canonical column list
/// (id, content, subject, use_yn, reg_dtm, modi_dtm) to a record
fn map_row(row: &Row<'_>) -> rusqlite::Result<EmotionRecord> {
    let use_yn_raw: String = row.get(3)?;
    let use_yn = UseYn::parse(&use_yn_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("use_yn must be 'Y' or 'N', found {use_yn_raw:?}").into(),
        )
    })?;

    let reg_dtm_raw: String = row.get(4)?;
    let reg_dtm = parse_dtm(&reg_dtm_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unparseable reg_dtm {reg_dtm_raw:?}").into(),
        )
    })?;

    let modi_dtm_raw: String = row.get(5)?;
    let modi_dtm = parse_dtm(&modi_dtm_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            format!("unparseable modi_dtm {modi_dtm_raw:?}").into(),
        )
    })?;

    Ok(EmotionRecord {
        id: row.get(0)?,
        content: row.get(1)?,
        subject: row.get(2)?,
        use_yn,
        reg_dtm,
        modi_dtm,
    })
}

/// Convert builder bind values into rusqlite parameters
fn to_params(binds: &[BindValue]) -> Vec<Value> {
    binds
        .iter()
        .map(|bind| match bind {
            BindValue::Text(text) => Value::Text(text.clone()),
            BindValue::Int(int) => Value::Integer(*int),
        })
        .collect()
}

/// SQLite gateway for emotion records
///
/// All functions take a borrowed connection and perform exactly one
/// statement; the caller owns connection acquisition and release.
pub struct EmotionGateway;

impl EmotionGateway {
    /// Insert a new record, returning its store-assigned id
    ///
    /// `use_yn` and both timestamps come from the store-side column
    /// defaults.
    ///
    /// # Errors
    ///
    /// - `WriteFailed` — the insert affected zero rows
    /// - `Persistence` — connection or driver failure
    pub fn create(conn: &Connection, content: &str, subject: Option<&str>) -> Result<i64> {
        let created = conn
            .execute(
                "INSERT INTO emotions (content, subject) VALUES (?1, ?2)",
                params![content, subject],
            )
            .map_err(|e| from_rusqlite("create", e))?;
        if created == 0 {
            return Err(EmotionError::WriteFailed { op: "create" });
        }

        let id = conn.last_insert_rowid();
        tracing::debug!(id, created, "record created");
        Ok(id)
    }

    /// Single-row lookup by id
    ///
    /// # Errors
    ///
    /// - `NotFound` — no row matches the id (a client-input error)
    /// - `Persistence` — connection or driver failure
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<EmotionRecord> {
        conn.query_row(
            "SELECT id, content, subject, use_yn, reg_dtm, modi_dtm FROM emotions WHERE id = ?1",
            params![id],
            map_row,
        )
        .optional()
        .map_err(|e| from_rusqlite("get_by_id", e))?
        .ok_or(EmotionError::NotFound { id })
    }

    /// Filtered, sorted, paginated listing
    ///
    /// Delegates statement construction to the core builder. An empty
    /// result is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// - `Persistence` — connection or driver failure
    pub fn list(conn: &Connection, query: &ListQuery) -> Result<Vec<EmotionRecord>> {
        let fragment = build_list_query(query);

        let mut stmt = conn
            .prepare(&fragment.sql)
            .map_err(|e| from_rusqlite("list", e))?;
        let rows = stmt
            .query_map(params_from_iter(to_params(&fragment.binds)), map_row)
            .map_err(|e| from_rusqlite("list", e))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| from_rusqlite("list", e))?);
        }
        Ok(records)
    }

    /// Full update of all three mutable fields, refreshing `modi_dtm`
    ///
    /// # Errors
    ///
    /// - `WriteFailed` — zero rows affected; this conflates "no such id"
    ///   with a failed write, the service cannot tell them apart
    /// - `Persistence` — connection or driver failure
    pub fn replace(
        conn: &Connection,
        id: i64,
        content: &str,
        subject: Option<&str>,
        use_yn: UseYn,
    ) -> Result<()> {
        let updated = conn
            .execute(
                "UPDATE emotions SET content = ?1, subject = ?2, use_yn = ?3, \
                 modi_dtm = CURRENT_TIMESTAMP WHERE id = ?4",
                params![content, subject, use_yn.as_str(), id],
            )
            .map_err(|e| from_rusqlite("replace", e))?;
        if updated == 0 {
            return Err(EmotionError::WriteFailed { op: "replace" });
        }

        tracing::debug!(id, updated, "record replaced");
        Ok(())
    }

    /// Partial update via the dynamic SET builder
    ///
    /// With no optional fields present this is still executed as a
    /// timestamp-only touch.
    ///
    /// # Errors
    ///
    /// - `WriteFailed` — zero rows affected (same id/write conflation as
    ///   `replace`)
    /// - `Persistence` — connection or driver failure
    pub fn patch(conn: &Connection, id: i64, request: &PatchRequest) -> Result<()> {
        let fragment = build_patch_query(id, request);

        let patched = conn
            .execute(&fragment.sql, params_from_iter(to_params(&fragment.binds)))
            .map_err(|e| from_rusqlite("patch", e))?;
        if patched == 0 {
            return Err(EmotionError::WriteFailed { op: "patch" });
        }

        tracing::debug!(id, patched, "record patched");
        Ok(())
    }

    /// Soft-delete: flip `use_yn` to `'N'` and refresh `modi_dtm`
    ///
    /// Does not check prior state, so deleting an already-deleted record
    /// succeeds idempotently as long as the row exists.
    ///
    /// # Errors
    ///
    /// - `WriteFailed` — zero rows affected (the row does not exist)
    /// - `Persistence` — connection or driver failure
    pub fn soft_delete(conn: &Connection, id: i64) -> Result<()> {
        let deleted = conn
            .execute(
                "UPDATE emotions SET use_yn = 'N', modi_dtm = CURRENT_TIMESTAMP WHERE id = ?1",
                params![id],
            )
            .map_err(|e| from_rusqlite("soft_delete", e))?;
        if deleted == 0 {
            return Err(EmotionError::WriteFailed { op: "soft_delete" });
        }

        tracing::debug!(id, deleted, "record soft-deleted");
        Ok(())
    }
}
