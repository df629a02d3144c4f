//! Screen state machines.
//!
//! Each screen holds its own presentation state and exposes an explicit
//! submit/load operation; every outcome the user would see surfaces as an
//! [`Alert`]. The screens are headless: a shell (the CLI binary, or a
//! future UI layer) renders the state and forwards user gestures.

pub mod auth;
pub mod donate;
pub mod impact;
pub mod volunteer;

pub use auth::{AuthMode, AuthScreen};
pub use donate::DonateScreen;
pub use impact::{ImpactScreen, ImpactView};
pub use volunteer::VolunteerScreen;

/// Title used for success alerts.
const SUCCESS_TITLE: &str = "Success";

/// Title used for error alerts.
const ERROR_TITLE: &str = "Error";

/// Title used for validation alerts.
const VALIDATION_TITLE: &str = "Validation Error";

/// A blocking message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Alert title.
    pub title: String,
    /// Alert body.
    pub message: String,
}

impl Alert {
    /// Create an alert with an explicit title.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// A success alert.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(SUCCESS_TITLE, message)
    }

    /// An error alert.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ERROR_TITLE, message)
    }

    /// A validation alert carrying the first violated constraint.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(VALIDATION_TITLE, message)
    }

    /// Check if this is a success alert.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.title == SUCCESS_TITLE
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
