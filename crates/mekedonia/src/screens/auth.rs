//! The sign-in / sign-up screen.
//!
//! A single screen toggling between the two modes. Local checks cover only
//! field presence and email shape; credential decisions belong to the auth
//! collaborator behind the session manager.

use crate::account::SessionManager;
use crate::validation::{validate_email, validate_full_name, validate_password};

use super::Alert;

/// Which form the screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Signing in to an existing account.
    #[default]
    SignIn,
    /// Registering a new account.
    SignUp,
}

/// State of the auth screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthScreen {
    mode: AuthMode,
    email: String,
    password: String,
    name: String,
    busy: bool,
}

impl AuthScreen {
    /// Create the screen in sign-in mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch between sign-in and sign-up.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Set the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Set the password field.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Set the display name field (sign-up only).
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Whether a submission is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit the form in the current mode.
    ///
    /// On success the session manager holds the signed-in user and the
    /// password field is cleared.
    pub async fn submit(&mut self, session: &mut SessionManager) -> Alert {
        if let Err(e) = validate_email(&self.email) {
            return Alert::validation(e.to_string());
        }
        if let Err(e) = validate_password(&self.password) {
            return Alert::validation(e.to_string());
        }
        if self.mode == AuthMode::SignUp {
            if let Err(e) = validate_full_name(&self.name) {
                return Alert::validation(e.to_string());
            }
        }

        self.busy = true;
        let result = match self.mode {
            AuthMode::SignIn => session.sign_in(&self.email, &self.password).await,
            AuthMode::SignUp => {
                session
                    .sign_up(&self.email, &self.password, &self.name)
                    .await
            }
        };
        self.busy = false;

        match result {
            Ok(user) => {
                self.password.clear();
                Alert::success(format!("Signed in as {}", user.email))
            }
            Err(e) => Alert::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;
    use crate::store::SessionStore;
    use std::sync::Arc;

    fn session() -> SessionManager {
        let store = SessionStore::open_in_memory().unwrap();
        SessionManager::new(store, Arc::new(MockBackend::new()))
    }

    fn filled_screen() -> AuthScreen {
        let mut screen = AuthScreen::new();
        screen.set_email("donor@example.org");
        screen.set_password("hunter2");
        screen
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let mut session = session();
        let mut screen = filled_screen();

        let alert = screen.submit(&mut session).await;

        assert!(alert.is_success());
        assert!(session.is_signed_in());
        assert!(!screen.is_busy());
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_submission() {
        let mut session = session();
        let mut screen = filled_screen();
        screen.set_email("not-an-email");

        let alert = screen.submit(&mut session).await;

        assert_eq!(alert.title, "Validation Error");
        assert_eq!(alert.message, "Invalid email address");
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_empty_password_blocks_submission() {
        let mut session = session();
        let mut screen = filled_screen();
        screen.set_password("");

        let alert = screen.submit(&mut session).await;

        assert_eq!(alert.message, "Password is required");
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_up_requires_name() {
        let mut session = session();
        let mut screen = filled_screen();
        screen.set_mode(AuthMode::SignUp);

        let alert = screen.submit(&mut session).await;

        assert_eq!(alert.message, "Full name is required");
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_up_success_uses_name() {
        let mut session = session();
        let mut screen = filled_screen();
        screen.set_mode(AuthMode::SignUp);
        screen.set_name("Sarah M.");

        let alert = screen.submit(&mut session).await;

        assert!(alert.is_success());
        assert_eq!(session.current_user().unwrap().name, "Sarah M.");
    }

    #[tokio::test]
    async fn test_password_cleared_after_success() {
        let mut session = session();
        let mut screen = filled_screen();

        screen.submit(&mut session).await;

        // Resubmitting now fails the password check: the field was cleared
        let alert = screen.submit(&mut session).await;
        assert_eq!(alert.message, "Password is required");
    }

    #[tokio::test]
    async fn test_gateway_failure_surfaces_error() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_auth("service down");
        let store = SessionStore::open_in_memory().unwrap();
        let mut session = SessionManager::new(store, backend);
        let mut screen = filled_screen();

        let alert = screen.submit(&mut session).await;

        assert_eq!(alert.title, "Error");
        assert!(alert.message.contains("service down"));
    }
}
