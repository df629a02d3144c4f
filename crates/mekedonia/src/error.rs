//! Error types for the Mekedonia app core.
//!
//! This module defines the crate-level error type aggregating the failure
//! modes of every operation: session storage, configuration, and the
//! domain errors raised by the auth, donation, volunteer and impact flows.

use std::path::PathBuf;
use thiserror::Error;

use crate::account::AuthError;
use crate::donation::gateway::PaymentError;
use crate::donation::DonationError;
use crate::impact::FeedError;
use crate::validation::ValidationError;
use crate::volunteer::SubmitError;

/// The main error type for Mekedonia operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Session store errors ===
    /// Failed to open or create the session database.
    #[error("failed to open session store at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A session store query failed.
    #[error("session store query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run session store migrations.
    #[error("session store migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Domain errors ===
    /// Authentication against the auth collaborator failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A form field violated a schema constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A donation attempt failed.
    #[error(transparent)]
    Donation(#[from] DonationError),

    /// The payment collaborator reported a failure.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Submitting a volunteer application failed.
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// Fetching impact data failed.
    #[error(transparent)]
    Feed(#[from] FeedError),

    // === Serialization errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === I/O errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for Mekedonia operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a form validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Donation(DonationError::Invalid(_))
        )
    }

    /// Check if this error is a session storage failure.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::DatabaseMigration { .. }
                | Self::DirectoryCreate { .. }
        )
    }
}
