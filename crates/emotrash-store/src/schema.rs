//! Schema bootstrap for the `emotions` table
//!
//! One idempotent CREATE TABLE; there is no migration framework. The store
//! supplies the defaults the gateway relies on: `use_yn` starts at `'Y'`
//! and both timestamps start at the insert time.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

const EMOTIONS_DDL: &str = "
CREATE TABLE IF NOT EXISTS emotions (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    content  TEXT NOT NULL,
    subject  TEXT,
    use_yn   TEXT NOT NULL DEFAULT 'Y' CHECK (use_yn IN ('Y', 'N')),
    reg_dtm  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    modi_dtm TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
";

/// Create the `emotions` table if it does not exist
pub fn init(conn: &Connection) -> Result<()> {
    conn.execute_batch(EMOTIONS_DDL)
        .map_err(|e| from_rusqlite("schema_init", e))
}
