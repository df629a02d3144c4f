//! Session store for the Mekedonia app.
//!
//! This module provides the `SQLite`-backed persistent key-value store that
//! holds the device session: at most one serialized user record under a
//! single well-known key. Generic `get`/`set`/`delete` operations are
//! exposed alongside the typed user accessors.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::account::User;
use crate::error::{Error, Result};

/// Key under which the serialized user record is stored.
const USER_KEY: &str = "user";

/// Persistent key-value store for the device session.
///
/// Holds at most one [`User`] record: writes go through a fixed key with
/// `INSERT OR REPLACE`, so a new sign-in overwrites the previous session
/// rather than accumulating records.
#[derive(Debug)]
pub struct SessionStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl SessionStore {
    /// Open or create a session store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening session store at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        // Initialize schema
        migrations::initialize_schema(&conn)?;

        info!("Session store opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory session store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a value by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM session WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a value, replacing any existing value under the same key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r"
            INSERT OR REPLACE INTO session (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ",
            params![key, value],
        )?;
        debug!("Stored session value under key '{}'", key);
        Ok(())
    }

    /// Delete a value by key.
    ///
    /// Returns `true` if a value was deleted, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM session WHERE key = ?1", [key])?;
        Ok(affected > 0)
    }

    /// Load the stored user record, if any.
    ///
    /// Absence of a stored record is not an error: it just means there is
    /// no active session on this device.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the stored
    /// record cannot be decoded.
    pub fn load_user(&self) -> Result<Option<User>> {
        match self.get(USER_KEY)? {
            Some(json) => {
                let user: User = serde_json::from_str(&json)?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Persist the user record, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails.
    pub fn save_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.set(USER_KEY, &json)?;
        info!("Session persisted for user {}", user.id);
        Ok(())
    }

    /// Remove the stored user record.
    ///
    /// Returns `true` if a record was removed, `false` if the session was
    /// already empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear_user(&self) -> Result<bool> {
        let removed = self.delete(USER_KEY)?;
        if removed {
            info!("Session record removed");
        }
        Ok(removed)
    }
}
