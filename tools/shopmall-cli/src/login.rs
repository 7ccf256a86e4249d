//! Login form validation.
//!
//! There is no account backend: a form that validates is simply accepted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Shortest password the form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^09\d{8}$").unwrap_or_else(|e| panic!("invalid phone pattern: {e}"))
});

/// How the shopper identifies themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LoginId {
    Email(String),
    Phone(String),
}

impl LoginId {
    fn field(&self) -> &'static str {
        match self {
            LoginId::Email(_) => "email",
            LoginId::Phone(_) => "phone",
        }
    }
}

/// Submitted login form.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub id: LoginId,
    #[serde(skip)]
    pub password: String,
    pub remember_me: bool,
}

/// A problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl LoginForm {
    /// Validate every field, returning all problems found.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        match &self.id {
            LoginId::Email(email) if email.is_empty() => errors.push(FieldError {
                field: self.id.field(),
                message: "Please enter your email address",
            }),
            LoginId::Email(email) if !EMAIL_RE.is_match(email) => errors.push(FieldError {
                field: self.id.field(),
                message: "Please enter a valid email address",
            }),
            LoginId::Phone(phone) if phone.is_empty() => errors.push(FieldError {
                field: self.id.field(),
                message: "Please enter your mobile number",
            }),
            LoginId::Phone(phone) if !PHONE_RE.is_match(phone) => errors.push(FieldError {
                field: self.id.field(),
                message: "Please enter a valid mobile number (09xxxxxxxx)",
            }),
            _ => {}
        }

        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Please enter your password",
            });
        } else if password_len(&self.password) < MIN_PASSWORD_LEN {
            errors.push(FieldError {
                field: "password",
                message: "Password must be at least 6 characters",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Password length in UTF-16 code units, the way browser forms count it.
fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: LoginId, password: &str) -> LoginForm {
        LoginForm {
            id,
            password: password.to_string(),
            remember_me: false,
        }
    }

    fn fields(result: Result<(), Vec<FieldError>>) -> Vec<&'static str> {
        result
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn test_valid_email_login() {
        let login = form(LoginId::Email("amy@example.com".into()), "secret1");
        assert!(login.validate().is_ok());
    }

    #[test]
    fn test_valid_phone_login() {
        let login = form(LoginId::Phone("0912345678".into()), "123456");
        assert!(login.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        for email in ["", "amy", "amy@example", "@."] {
            let login = form(LoginId::Email(email.into()), "secret1");
            assert_eq!(fields(login.validate()), vec!["email"], "email {email:?}");
        }
    }

    #[test]
    fn test_invalid_phone() {
        for phone in ["", "0812345678", "091234567", "09123456789", "09-2345678"] {
            let login = form(LoginId::Phone(phone.into()), "secret1");
            assert_eq!(fields(login.validate()), vec!["phone"], "phone {phone:?}");
        }
    }

    #[test]
    fn test_password_rules() {
        let login = form(LoginId::Email("amy@example.com".into()), "");
        assert_eq!(fields(login.validate()), vec!["password"]);

        let login = form(LoginId::Email("amy@example.com".into()), "12345");
        assert_eq!(fields(login.validate()), vec!["password"]);
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Each emoji is one char but two UTF-16 units.
        let login = form(LoginId::Email("amy@example.com".into()), "😀😀😀");
        assert!(login.validate().is_ok());

        let login = form(LoginId::Email("amy@example.com".into()), "密碼12");
        assert_eq!(fields(login.validate()), vec!["password"]);
    }

    #[test]
    fn test_reports_all_errors() {
        let login = form(LoginId::Phone("123".into()), "abc");
        assert_eq!(fields(login.validate()), vec!["phone", "password"]);
    }
}
