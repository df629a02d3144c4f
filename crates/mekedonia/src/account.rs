//! User accounts and the device session.
//!
//! This module defines the [`User`] record, the authentication collaborator
//! seam, and the [`SessionManager`] owning the in-memory session state and
//! its persistence. The manager is constructed once at application startup
//! and passed by reference to whatever drives the UI; there is no ambient
//! global session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::store::SessionStore;

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular donor/volunteer account.
    User,
    /// An administrator account.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// The authenticated user on this device.
///
/// Created on sign-in or sign-up, persisted to the session store as its
/// sole record, and destroyed on sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the auth collaborator.
    pub id: String,
    /// The user's email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
}

/// Errors reported by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The email/password pair was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An account already exists for this email address.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// The authentication service could not be reached.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// The authentication collaborator.
///
/// Implementors resolve credentials to a [`User`]. The in-process mock
/// synthesizes the user locally; a real backend would validate credentials
/// server-side and return the server-issued record through the same seam.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    /// Sign an existing user in.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the credentials are rejected or the
    /// service is unavailable.
    async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<User, AuthError>;

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the account cannot be created.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> std::result::Result<User, AuthError>;
}

/// Owner of the device session.
///
/// Holds the current [`User`] (or none) and a loading flag for the UI, and
/// keeps the in-memory state in step with the session store. All operations
/// are sequential: there is a single manager instance per process and no
/// concurrent writers to the session record.
pub struct SessionManager {
    store: SessionStore,
    gateway: Arc<dyn AuthGateway>,
    user: Option<User>,
    loading: bool,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("user", &self.user)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create a session manager over the given store and auth collaborator.
    #[must_use]
    pub fn new(store: SessionStore, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            store,
            gateway,
            user: None,
            loading: false,
        }
    }

    /// The currently signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether an auth or session-restore operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Restore a previously stored session.
    ///
    /// Called once at process start. An empty store is not an error: the
    /// session simply starts signed out. A storage or decode failure is
    /// logged and raised, and the session is left empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record cannot be read or decoded.
    pub fn load(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.store.load_user();
        self.loading = false;

        match result {
            Ok(Some(user)) => {
                debug!("Restored session for user {}", user.id);
                self.user = Some(user);
                Ok(())
            }
            Ok(None) => {
                debug!("No stored session");
                self.user = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to restore session: {e}");
                self.user = None;
                Err(e)
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the resulting user is persisted to the session store and
    /// the in-memory state updated. If persistence fails, the in-memory
    /// state is left unchanged (apart from the loading flag) and the error
    /// is raised.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails or the session cannot be
    /// persisted.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<User> {
        self.loading = true;
        let result = self.gateway.sign_in(email, password).await;
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                self.loading = false;
                return Err(e.into());
            }
        };

        if let Err(e) = self.store.save_user(&user) {
            self.loading = false;
            return Err(e);
        }

        info!("Signed in as {} ({})", user.name, user.email);
        self.user = Some(user.clone());
        self.loading = false;
        Ok(user)
    }

    /// Register a new account and sign it in.
    ///
    /// Follows the same persistence contract as [`Self::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails or the session cannot be
    /// persisted.
    pub async fn sign_up(&mut self, email: &str, password: &str, name: &str) -> Result<User> {
        self.loading = true;
        let result = self.gateway.sign_up(email, password, name).await;
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                self.loading = false;
                return Err(e.into());
            }
        };

        if let Err(e) = self.store.save_user(&user) {
            self.loading = false;
            return Err(e);
        }

        info!("Registered {} ({})", user.name, user.email);
        self.user = Some(user.clone());
        self.loading = false;
        Ok(user)
    }

    /// Sign out, destroying the stored session record.
    ///
    /// If the stored record cannot be removed, the in-memory state is left
    /// unchanged and the error is raised.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record cannot be removed.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.clear_user()?;
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
        Ok(())
    }

    /// Borrow the underlying session store.
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
