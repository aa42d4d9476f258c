//! Emotrash Store - SQLite persistence for emotion records
//!
//! Provides:
//! - Connection helpers (file-backed and in-memory)
//! - One-shot schema bootstrap for the `emotions` table
//! - The Record Store Gateway executing parameterized statements and
//!   mapping rows back to `EmotionRecord`

pub mod db;
pub mod errors;
pub mod gateway;
pub mod schema;

// Re-export key types
pub use emotrash_core::Result;
pub use gateway::EmotionGateway;
