//! Form validation for user-entered fields.
//!
//! Validation is synchronous and side-effect-free: a draft record is checked
//! against its schema constraints on every submission attempt, and the first
//! violated constraint is reported as a tagged error variant whose `Display`
//! text is the message surfaced to the user.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum length of a volunteer's full name.
pub const MIN_FULL_NAME_LEN: usize = 2;

/// Minimum length of a phone number.
pub const MIN_PHONE_LEN: usize = 10;

/// Minimum length of a volunteer's motivation text.
pub const MIN_MOTIVATION_LEN: usize = 10;

/// A violated schema constraint.
///
/// One variant per constraint; the display text is the human-readable
/// message shown in the validation alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The full name is missing or shorter than [`MIN_FULL_NAME_LEN`].
    #[error("Full name is required")]
    FullNameTooShort,

    /// The email address does not have a plausible shape.
    #[error("Invalid email address")]
    InvalidEmail,

    /// The phone number has fewer than [`MIN_PHONE_LEN`] digits.
    #[error("Invalid phone number")]
    InvalidPhone,

    /// The skills field is empty.
    #[error("Please list your relevant skills")]
    SkillsRequired,

    /// The motivation text is shorter than [`MIN_MOTIVATION_LEN`].
    #[error("Please share your motivation")]
    MotivationTooShort,

    /// The password field is empty.
    #[error("Password is required")]
    PasswordRequired,

    /// The donation amount could not be parsed as a dollar value.
    #[error("Enter a valid donation amount")]
    AmountNotNumeric,

    /// The donation amount is zero or negative.
    #[error("Donation amount must be greater than zero")]
    AmountNotPositive,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 ().-]*$").expect("phone pattern is valid"))
}

/// Validate an email address.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] if the address does not match
/// the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validate a phone number.
///
/// Accepts digits with common separators and an optional leading `+`;
/// requires at least [`MIN_PHONE_LEN`] digits.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhone`] if the number is malformed
/// or too short.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if !phone_regex().is_match(trimmed) {
        return Err(ValidationError::InvalidPhone);
    }
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_LEN {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Validate a volunteer's full name.
///
/// # Errors
///
/// Returns [`ValidationError::FullNameTooShort`] if the trimmed name has
/// fewer than [`MIN_FULL_NAME_LEN`] characters.
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_FULL_NAME_LEN {
        Err(ValidationError::FullNameTooShort)
    } else {
        Ok(())
    }
}

/// Validate the skills field.
///
/// # Errors
///
/// Returns [`ValidationError::SkillsRequired`] if the field is empty.
pub fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if skills.trim().is_empty() {
        Err(ValidationError::SkillsRequired)
    } else {
        Ok(())
    }
}

/// Validate the motivation field.
///
/// # Errors
///
/// Returns [`ValidationError::MotivationTooShort`] if the trimmed text has
/// fewer than [`MIN_MOTIVATION_LEN`] characters.
pub fn validate_motivation(motivation: &str) -> Result<(), ValidationError> {
    if motivation.trim().chars().count() < MIN_MOTIVATION_LEN {
        Err(ValidationError::MotivationTooShort)
    } else {
        Ok(())
    }
}

/// Validate a password field.
///
/// Only presence is checked locally; strength rules belong to the auth
/// collaborator.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordRequired`] if the password is empty.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plausible_addresses() {
        assert!(validate_email("donor@example.org").is_ok());
        assert!(validate_email("  first.last@mail.example.com  ").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(
            validate_email("missing@tld"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("two words@example.org"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_phone_accepts_common_formats() {
        assert!(validate_phone("0911234567").is_ok());
        assert!(validate_phone("+251 91 123 4567").is_ok());
        assert!(validate_phone("(091) 123-4567").is_ok());
    }

    #[test]
    fn test_validate_phone_rejects_short_or_malformed_numbers() {
        assert_eq!(validate_phone("12345"), Err(ValidationError::InvalidPhone));
        assert_eq!(
            validate_phone("call me maybe"),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(validate_phone(""), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Jo").is_ok());
        assert!(validate_full_name("Sarah M.").is_ok());
        assert_eq!(
            validate_full_name("J"),
            Err(ValidationError::FullNameTooShort)
        );
        assert_eq!(
            validate_full_name("   "),
            Err(ValidationError::FullNameTooShort)
        );
    }

    #[test]
    fn test_validate_skills() {
        assert!(validate_skills("cooking").is_ok());
        assert_eq!(validate_skills(""), Err(ValidationError::SkillsRequired));
        assert_eq!(validate_skills("  "), Err(ValidationError::SkillsRequired));
    }

    #[test]
    fn test_validate_motivation() {
        assert!(validate_motivation("I want to give back").is_ok());
        assert_eq!(
            validate_motivation("too short"),
            Err(ValidationError::MotivationTooShort)
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("hunter2").is_ok());
        assert_eq!(
            validate_password(""),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_error_messages_match_schema_text() {
        assert_eq!(
            ValidationError::FullNameTooShort.to_string(),
            "Full name is required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email address"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Invalid phone number"
        );
        assert_eq!(
            ValidationError::SkillsRequired.to_string(),
            "Please list your relevant skills"
        );
        assert_eq!(
            ValidationError::MotivationTooShort.to_string(),
            "Please share your motivation"
        );
    }
}
