//! Volunteer registration.
//!
//! A volunteer application is assembled field by field in a
//! [`VolunteerForm`], validated on submission, and handed to the
//! [`VolunteerDesk`] collaborator. The application is transient: it is
//! discarded from local state once the desk accepts it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{
    validate_email, validate_full_name, validate_motivation, validate_phone, validate_skills,
    ValidationError,
};

/// When a volunteer is available to help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Available on weekdays.
    #[default]
    Weekdays,
    /// Available on weekends.
    Weekends,
    /// Available any day.
    Both,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekdays => write!(f, "weekdays"),
            Self::Weekends => write!(f, "weekends"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// A validated volunteer application, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplication {
    /// The applicant's full name.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// When the applicant is available.
    pub availability: Availability,
    /// Relevant skills and experience.
    pub skills: String,
    /// Why the applicant wants to volunteer.
    pub motivation: String,
}

/// Errors reported by the volunteer desk collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The desk could not accept the application.
    #[error("volunteer application submission failed: {0}")]
    Backend(String),
}

/// The volunteer-application collaborator.
#[async_trait::async_trait]
pub trait VolunteerDesk: Send + Sync {
    /// Submit an application.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the application is not accepted.
    async fn submit(
        &self,
        application: &VolunteerApplication,
    ) -> std::result::Result<(), SubmitError>;
}

/// The volunteer registration form.
///
/// Accumulates loosely-typed field values as the applicant types; nothing
/// is checked until [`VolunteerForm::finalize`], which re-runs the whole
/// schema and reports the first violated constraint in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VolunteerForm {
    full_name: String,
    email: String,
    phone: String,
    availability: Availability,
    skills: String,
    motivation: String,
}

impl VolunteerForm {
    /// Start an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full name field.
    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    /// Set the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Set the phone field.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    /// Set the availability selection.
    pub fn set_availability(&mut self, value: Availability) {
        self.availability = value;
    }

    /// Set the skills field.
    pub fn set_skills(&mut self, value: impl Into<String>) {
        self.skills = value.into();
    }

    /// Set the motivation field.
    pub fn set_motivation(&mut self, value: impl Into<String>) {
        self.motivation = value.into();
    }

    /// The current availability selection.
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Reset all fields to their initial values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if every field is at its initial value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validate the form into a [`VolunteerApplication`].
    ///
    /// Constraints are checked in field order and the first violation is
    /// returned. Validation is pure and re-runs in full on every call.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ValidationError`].
    pub fn finalize(&self) -> Result<VolunteerApplication, ValidationError> {
        validate_full_name(&self.full_name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        validate_skills(&self.skills)?;
        validate_motivation(&self.motivation)?;

        Ok(VolunteerApplication {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            availability: self.availability,
            skills: self.skills.trim().to_string(),
            motivation: self.motivation.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> VolunteerForm {
        let mut form = VolunteerForm::new();
        form.set_full_name("Sarah M.");
        form.set_email("sarah@example.org");
        form.set_phone("0911234567");
        form.set_availability(Availability::Weekends);
        form.set_skills("cooking, first aid");
        form.set_motivation("I want to give back to my community");
        form
    }

    #[test]
    fn test_availability_display() {
        assert_eq!(Availability::Weekdays.to_string(), "weekdays");
        assert_eq!(Availability::Weekends.to_string(), "weekends");
        assert_eq!(Availability::Both.to_string(), "both");
    }

    #[test]
    fn test_availability_default() {
        assert_eq!(Availability::default(), Availability::Weekdays);
    }

    #[test]
    fn test_availability_serde_lowercase() {
        let json = serde_json::to_string(&Availability::Both).unwrap();
        assert_eq!(json, "\"both\"");
    }

    #[test]
    fn test_finalize_valid_form() {
        let application = filled_form().finalize().unwrap();

        assert_eq!(application.full_name, "Sarah M.");
        assert_eq!(application.email, "sarah@example.org");
        assert_eq!(application.availability, Availability::Weekends);
    }

    #[test]
    fn test_finalize_empty_form_fails_on_full_name() {
        let result = VolunteerForm::new().finalize();
        assert_eq!(result, Err(ValidationError::FullNameTooShort));
    }

    #[test]
    fn test_finalize_reports_first_violation_in_field_order() {
        // Both email and phone are invalid; email comes first in the schema
        let mut form = filled_form();
        form.set_email("not-an-email");
        form.set_phone("123");

        assert_eq!(form.finalize(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_finalize_invalid_email_message() {
        let mut form = filled_form();
        form.set_email("not-an-email");

        let err = form.finalize().unwrap_err();
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn test_finalize_short_motivation() {
        let mut form = filled_form();
        form.set_motivation("because");

        assert_eq!(form.finalize(), Err(ValidationError::MotivationTooShort));
    }

    #[test]
    fn test_finalize_trims_fields() {
        let mut form = filled_form();
        form.set_full_name("  Sarah M.  ");

        let application = form.finalize().unwrap();
        assert_eq!(application.full_name, "Sarah M.");
    }

    #[test]
    fn test_finalize_is_repeatable() {
        // Validation is pure: the same form finalizes the same way twice
        let form = filled_form();
        assert_eq!(form.finalize(), form.finalize());
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        assert!(!form.is_empty());

        form.reset();

        assert!(form.is_empty());
        assert_eq!(form.availability(), Availability::Weekdays);
    }

    #[test]
    fn test_application_wire_shape_is_camel_case() {
        let application = filled_form().finalize().unwrap();
        let json = serde_json::to_string(&application).unwrap();

        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"availability\":\"weekends\""));
        assert!(!json.contains("full_name"));
    }

    #[test]
    fn test_submit_error_display() {
        let err = SubmitError::Backend("503".to_string());
        assert!(err.to_string().contains("503"));
    }
}
