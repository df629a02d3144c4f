//! The volunteer registration screen.
//!
//! Wraps the volunteer form: validation runs on submit, and the first
//! violated constraint is surfaced without contacting the desk. On a
//! successful submission the form resets; on failure the draft is kept
//! so the applicant can correct and resubmit.

use crate::volunteer::{VolunteerDesk, VolunteerForm};

use super::Alert;

/// Alert body shown after a successful submission.
const THANK_YOU_MESSAGE: &str = "Thank you for volunteering! We will contact you soon.";

/// Alert body shown when the desk rejects the submission.
const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// State of the volunteer screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VolunteerScreen {
    form: VolunteerForm,
    busy: bool,
}

impl VolunteerScreen {
    /// Create the screen with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The form being filled in.
    #[must_use]
    pub fn form(&self) -> &VolunteerForm {
        &self.form
    }

    /// Mutable access to the form fields.
    pub fn form_mut(&mut self) -> &mut VolunteerForm {
        &mut self.form
    }

    /// Whether a submission is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit the application.
    ///
    /// Validation failures surface the first violated constraint and do
    /// not contact the desk. The returned alert is what the user sees.
    pub async fn submit(&mut self, desk: &dyn VolunteerDesk) -> Alert {
        let application = match self.form.finalize() {
            Ok(application) => application,
            Err(e) => return Alert::validation(e.to_string()),
        };

        self.busy = true;
        let result = desk.submit(&application).await;
        self.busy = false;

        match result {
            Ok(()) => {
                self.form.reset();
                Alert::success(THANK_YOU_MESSAGE)
            }
            Err(_) => Alert::error(SUBMIT_FAILED_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;
    use crate::volunteer::Availability;

    fn filled_screen() -> VolunteerScreen {
        let mut screen = VolunteerScreen::new();
        let form = screen.form_mut();
        form.set_full_name("Sarah M.");
        form.set_email("sarah@example.org");
        form.set_phone("0911234567");
        form.set_availability(Availability::Both);
        form.set_skills("cooking, first aid");
        form.set_motivation("I want to give back to my community");
        screen
    }

    #[tokio::test]
    async fn test_submit_success_resets_form() {
        let backend = MockBackend::new();
        let mut screen = filled_screen();

        let alert = screen.submit(&backend).await;

        assert!(alert.is_success());
        assert_eq!(alert.message, THANK_YOU_MESSAGE);
        assert!(screen.form().is_empty());
        assert_eq!(backend.applications_received(), 1);
    }

    #[tokio::test]
    async fn test_submit_invalid_email_never_reaches_desk() {
        let backend = MockBackend::new();
        let mut screen = filled_screen();
        screen.form_mut().set_email("not-an-email");

        let alert = screen.submit(&backend).await;

        assert_eq!(alert.title, "Validation Error");
        assert_eq!(alert.message, "Invalid email address");
        assert_eq!(backend.applications_received(), 0);
        // The draft is retained for correction
        assert!(!screen.form().is_empty());
    }

    #[tokio::test]
    async fn test_submit_empty_form_fails_on_first_field() {
        let backend = MockBackend::new();
        let mut screen = VolunteerScreen::new();

        let alert = screen.submit(&backend).await;

        assert_eq!(alert.message, "Full name is required");
        assert_eq!(backend.applications_received(), 0);
    }

    #[tokio::test]
    async fn test_submit_desk_failure_keeps_form() {
        let backend = MockBackend::new();
        backend.fail_submit("503");
        let mut screen = filled_screen();

        let alert = screen.submit(&backend).await;

        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, SUBMIT_FAILED_MESSAGE);
        assert!(!screen.form().is_empty());
        assert!(!screen.is_busy());
    }

    #[tokio::test]
    async fn test_submitted_application_carries_form_fields() {
        let backend = MockBackend::new();
        let mut screen = filled_screen();

        screen.submit(&backend).await;

        let application = backend.last_application().unwrap();
        assert_eq!(application.full_name, "Sarah M.");
        assert_eq!(application.availability, Availability::Both);
    }
}
