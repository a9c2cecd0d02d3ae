use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Client-side form errors. Shown inline in the form; no request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Username is required")]
    MissingUsername,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
    #[error("Please enter the title")]
    MissingTitle,
    #[error("Please enter the content")]
    MissingContent,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

impl Registration {
    /// Checks run in a fixed order; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.accepted_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Title first, then content.
pub(crate) fn validate_note_fields(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::MissingContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("ja ne@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_sign_in_rejects_bad_email_before_password() {
        let creds = Credentials {
            email: "bad".to_string(),
            password: String::new(),
            remember_me: false,
        };
        let err = creds.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_sign_in_requires_password() {
        let creds = Credentials {
            email: "jane@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(creds.validate(), Err(ValidationError::MissingPassword));
    }

    #[test]
    fn test_registration_ok() {
        assert_eq!(registration().validate(), Ok(()));
    }

    #[test]
    fn test_registration_order_short_circuits() {
        let mut r = registration();
        r.username = "  ".to_string();
        r.email = "bad".to_string();
        assert_eq!(r.validate(), Err(ValidationError::MissingUsername));

        let mut r = registration();
        r.email = "bad".to_string();
        r.password = "x".to_string();
        assert_eq!(r.validate(), Err(ValidationError::InvalidEmail));

        let mut r = registration();
        r.password = "12345".to_string();
        r.confirm_password = "different".to_string();
        assert_eq!(r.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_registration_password_mismatch_message() {
        let mut r = registration();
        r.confirm_password = "secret2".to_string();
        r.accepted_terms = false;
        let err = r.validate().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_registration_requires_terms() {
        let mut r = registration();
        r.accepted_terms = false;
        assert_eq!(r.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_note_fields_title_checked_first() {
        assert_eq!(
            validate_note_fields("", ""),
            Err(ValidationError::MissingTitle)
        );
        assert_eq!(
            validate_note_fields("Title", " "),
            Err(ValidationError::MissingContent)
        );
        assert_eq!(validate_note_fields("Title", "Body"), Ok(()));
    }
}
