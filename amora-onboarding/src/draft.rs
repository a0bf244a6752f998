use thiserror::Error;

use crate::date::CalendarDate;

/// Width of the emailed verification code.
pub const VERIFICATION_CODE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email must have a local and a domain part")]
    InvalidEmail,
    #[error("verification code must be 6 digits")]
    MalformedCode,
}

/// How the date of birth was captured: free-form text, or the structured
/// calendar picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOfBirth {
    Text(String),
    Picked(CalendarDate),
}

impl Default for DateOfBirth {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// The fields of one registration attempt, owned by the flow until a
/// submit consumes them.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateOfBirth,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationDraft {
    /// Pre-network checks, pure over the draft. The password comparison
    /// comes first and does not depend on any other field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.password_confirmation {
            return Err(ValidationError::PasswordMismatch);
        }
        for (name, value) in [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }
        if !has_email_shape(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Exactly one `@` with something on both sides. Anything deeper is the
/// service's call.
fn has_email_shape(email: &str) -> bool {
    let mut parts = email.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    )
}

/// Gate applied to every verification-code edit: digits only, at most the
/// fixed width.
pub fn acceptable_code_input(code: &str) -> bool {
    code.len() <= VERIFICATION_CODE_LEN && code.chars().all(|c| c.is_ascii_digit())
}

/// Submit-time guard on the entered code: present and numeric. Returns the
/// integer the service expects on the wire.
pub fn validate_code(code: &str) -> Result<u32, ValidationError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MalformedCode);
    }
    code.parse().map_err(|_| ValidationError::MalformedCode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: DateOfBirth::Text("15/06/1995".to_string()),
            email: "jane@x.com".to_string(),
            password: "p1".to_string(),
            password_confirmation: "p1".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(filled_draft().validate(), Ok(()));
    }

    #[test]
    fn test_password_mismatch_wins_over_everything_else() {
        let mut draft = filled_draft();
        draft.password_confirmation = "p2".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::PasswordMismatch));

        // Still a mismatch when every other field is empty.
        let draft = RegistrationDraft {
            password: "p1".to_string(),
            password_confirmation: "p2".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_missing_fields() {
        let cases: [(&str, fn(&mut RegistrationDraft)); 3] = [
            ("first name", |d| d.first_name.clear()),
            ("last name", |d| d.last_name.clear()),
            ("email", |d| d.email.clear()),
        ];
        for (name, clear) in cases {
            let mut draft = filled_draft();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(ValidationError::MissingField(name)));
        }

        // An empty password matches an empty confirmation, so it surfaces
        // as missing, not as a mismatch.
        let mut draft = filled_draft();
        draft.password.clear();
        draft.password_confirmation.clear();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("password"))
        );
    }

    #[test]
    fn test_email_shape() {
        for email in ["jane@x.com", "a@b"] {
            let mut draft = filled_draft();
            draft.email = email.to_string();
            assert_eq!(draft.validate(), Ok(()), "{email:?} should pass");
        }
        for email in ["janex.com", "@x.com", "jane@", "jane@x@com"] {
            let mut draft = filled_draft();
            draft.email = email.to_string();
            assert_eq!(
                draft.validate(),
                Err(ValidationError::InvalidEmail),
                "{email:?} should fail"
            );
        }
    }

    #[test]
    fn test_code_input_gate() {
        assert!(acceptable_code_input(""));
        assert!(acceptable_code_input("048213"));
        assert!(!acceptable_code_input("0482134"));
        assert!(!acceptable_code_input("48a21"));
        assert!(!acceptable_code_input("48 21"));
    }

    #[test]
    fn test_code_guard() {
        assert_eq!(validate_code("048213"), Ok(48213));
        assert_eq!(validate_code(""), Err(ValidationError::MalformedCode));
        assert_eq!(validate_code("48a213"), Err(ValidationError::MalformedCode));
    }
}
