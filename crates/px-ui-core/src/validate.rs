//! Form field validation shared by the auth and settings pages.
//!
//! Cosmetic, min-length-only rules; the messages are exactly what the forms
//! render under a failing field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Minimum password length on the login/signup forms.
pub const AUTH_PASSWORD_MIN: usize = 6;
/// Minimum length when changing the password from settings.
pub const SETTINGS_PASSWORD_MIN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// What a field expects beyond being present. Empty optional fields pass;
/// `required` is checked first, on the trimmed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password { min: usize },
}

pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return if required { Err(FieldError::Required) } else { Ok(()) };
    }
    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email => {
            if EMAIL_RE.is_match(value) {
                Ok(())
            } else {
                Err(FieldError::InvalidEmail)
            }
        }
        FieldKind::Password { min } => {
            if value.len() < min {
                Err(FieldError::PasswordTooShort { min })
            } else {
                Ok(())
            }
        }
    }
}

/// The signup retype field: must match the password field once both hold a
/// value.
pub fn validate_retype(password: &str, retyped: &str) -> Result<(), FieldError> {
    let retyped = retyped.trim();
    if retyped.is_empty() {
        return Ok(());
    }
    if !password.is_empty() && password != retyped {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_wins_over_kind() {
        assert_eq!(
            validate_field(FieldKind::Email, true, "   "),
            Err(FieldError::Required)
        );
        assert_eq!(validate_field(FieldKind::Email, false, ""), Ok(()));
    }

    #[test]
    fn email_shape() {
        for good in ["a@b.co", "first.last@mail.example.com"] {
            assert_eq!(validate_field(FieldKind::Email, true, good), Ok(()));
        }
        for bad in ["plain", "a@b", "a b@c.d", "@c.d", "a@.d"] {
            assert_eq!(
                validate_field(FieldKind::Email, true, bad),
                Err(FieldError::InvalidEmail),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn password_minimums() {
        let auth = FieldKind::Password {
            min: AUTH_PASSWORD_MIN,
        };
        assert_eq!(
            validate_field(auth, true, "12345"),
            Err(FieldError::PasswordTooShort { min: 6 })
        );
        assert_eq!(validate_field(auth, true, "123456"), Ok(()));

        let settings = FieldKind::Password {
            min: SETTINGS_PASSWORD_MIN,
        };
        assert_eq!(
            validate_field(settings, true, "1234567"),
            Err(FieldError::PasswordTooShort { min: 8 })
        );
    }

    #[test]
    fn retype_only_fails_on_a_real_mismatch() {
        assert_eq!(validate_retype("secret", ""), Ok(()));
        assert_eq!(validate_retype("", "secret"), Ok(()));
        assert_eq!(
            validate_retype("secret", "secert"),
            Err(FieldError::PasswordMismatch)
        );
        assert_eq!(validate_retype("secret", "secret"), Ok(()));
    }

    #[test]
    fn messages_match_the_forms() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            FieldError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
