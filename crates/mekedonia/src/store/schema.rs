//! `SQLite` schema definitions for the session store.
//!
//! This module contains the SQL statements for creating and managing
//! the session database schema.

/// SQL statement to create the session table.
///
/// A plain key-value table: the user record lives under a single well-known
/// key, so the table never holds more than a handful of rows.
pub const CREATE_SESSION_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS session (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_SESSION_TABLE, CREATE_METADATA_TABLE];
