//! Shared request state
//!
//! One SQLite connection behind a mutex, injected into handlers rather
//! than accessed as an ambient global. Each handler holds the lock for a
//! single blocking statement and releases it before responding.

use std::sync::{Arc, Mutex, MutexGuard};

use emotrash_core::{EmotionError, Result};
use rusqlite::Connection;

/// Application state shared across requests
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquire the shared connection for one statement
    ///
    /// # Errors
    ///
    /// - `Persistence` — the mutex was poisoned by a panicking holder
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| EmotionError::Persistence {
            op: "acquire_connection",
            message: "connection mutex poisoned".to_string(),
        })
    }
}
