//! Server-side field validation
//!
//! Rules run in a fixed order and the first failure wins. Only presence
//! and length are checked; email format and username characters are not.

use super::types::{RegistrationRequest, UserRecord};

pub const USERNAME_REQUIRED: &str = "Username required (server).";
pub const EMAIL_REQUIRED: &str = "Email required (server).";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters (server).";

/// Minimum password length in characters
pub const MIN_PASSWORD_CHARS: usize = 6;

/// A rejected registration, carrying the first failing rule's message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a registration request and derive the record to store
///
/// Rule order: username, email, password. Username and email must be
/// non-blank; the password must be non-blank and at least
/// [`MIN_PASSWORD_CHARS`] characters. On success the record carries the
/// trimmed username and email.
pub fn validate(req: &RegistrationRequest) -> Result<UserRecord, ValidationError> {
    if req.username.trim().is_empty() {
        return Err(ValidationError::new(USERNAME_REQUIRED));
    }

    if req.email.trim().is_empty() {
        return Err(ValidationError::new(EMAIL_REQUIRED));
    }

    if req.password.trim().is_empty() || req.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::new(PASSWORD_TOO_SHORT));
    }

    Ok(UserRecord {
        username: req.username.trim().to_string(),
        email: req.email.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegistrationRequest {
        RegistrationRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let user = validate(&request("alice", "a@example.com", "secret1")).expect("valid");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@example.com");
    }

    #[test]
    fn test_username_and_email_are_trimmed() {
        let user = validate(&request("  carl  ", " c@x.com ", "longenough")).expect("valid");
        assert_eq!(user.username, "carl");
        assert_eq!(user.email, "c@x.com");
    }

    #[test]
    fn test_empty_username_rejected() {
        let err = validate(&request("", "a@example.com", "secret1")).unwrap_err();
        assert_eq!(err.message(), USERNAME_REQUIRED);
    }

    #[test]
    fn test_whitespace_username_rejected() {
        let err = validate(&request("   ", "a@example.com", "secret1")).unwrap_err();
        assert_eq!(err.message(), USERNAME_REQUIRED);
    }

    #[test]
    fn test_empty_email_rejected() {
        let err = validate(&request("bob", "", "secret1")).unwrap_err();
        assert_eq!(err.message(), EMAIL_REQUIRED);
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate(&request("bob", "b@example.com", "123")).unwrap_err();
        assert_eq!(err.message(), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_password_boundary() {
        assert!(validate(&request("bob", "b@example.com", "12345")).is_err());
        assert!(validate(&request("bob", "b@example.com", "123456")).is_ok());
    }

    #[test]
    fn test_whitespace_password_rejected_regardless_of_length() {
        let err = validate(&request("bob", "b@example.com", "        ")).unwrap_err();
        assert_eq!(err.message(), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six non-ASCII characters, more than six bytes
        assert!(validate(&request("bob", "b@example.com", "пароль")).is_ok());
    }

    #[test]
    fn test_rule_order_username_first() {
        // Every field invalid: the username rule reports first
        let err = validate(&request(" ", "", "1")).unwrap_err();
        assert_eq!(err.message(), USERNAME_REQUIRED);

        // Username valid, email and password invalid: email reports first
        let err = validate(&request("bob", "", "1")).unwrap_err();
        assert_eq!(err.message(), EMAIL_REQUIRED);
    }

    #[test]
    fn test_no_format_validation() {
        // Anything non-blank passes the username/email rules
        assert!(validate(&request("!!", "not-an-email", "secret1")).is_ok());
    }
}
