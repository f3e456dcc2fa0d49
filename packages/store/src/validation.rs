//! # Auth form validation
//!
//! [`validate_fields`] applies every rule independently and returns all the
//! errors it finds at once, keyed by the [`Field`] they belong to. A field carries
//! at most one error: the first rule that fires for it wins, so a blank email
//! reports [`FieldError::EmailRequired`] and never also [`FieldError::AccountNotFound`].
//!
//! | Field | Rules (in order) |
//! |-------|------------------|
//! | name | signup only: non-blank after trim |
//! | email | non-blank after trim, matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`, login only: an account exists |
//! | password | non-empty, at least `min_password_len` characters, login only: matches the stored one |
//! | confirm password | signup only: non-empty, equals password |
//!
//! Account checks take the already-looked-up entry as an argument so this module
//! stays synchronous; [`crate::CredentialStore`] lookups happen in the caller.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{AuthFields, AuthMode, CredentialEntry};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

/// Form fields that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Form input name, as used by the auth screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("No account found with this email")]
    AccountNotFound,
    #[error("Incorrect password")]
    WrongPassword,
}

/// Field-level errors from one submission, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` unless `field` already has one.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn contains(&self, error: &FieldError) -> bool {
        self.0.values().any(|e| e == error)
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate auth form input.
///
/// `existing` is the stored entry for the trimmed email, if any. It is only
/// consulted in login mode.
pub fn validate_fields(
    mode: AuthMode,
    fields: &AuthFields,
    existing: Option<&CredentialEntry>,
    min_password_len: usize,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let email = fields.email.trim();

    if mode == AuthMode::Signup && fields.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    if email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }

    if fields.password.is_empty() {
        errors.insert(Field::Password, FieldError::PasswordRequired);
    } else if fields.password.chars().count() < min_password_len {
        errors.insert(
            Field::Password,
            FieldError::PasswordTooShort {
                min: min_password_len,
            },
        );
    }

    match mode {
        AuthMode::Signup => {
            if fields.confirm_password.is_empty() {
                errors.insert(Field::ConfirmPassword, FieldError::ConfirmRequired);
            } else if fields.confirm_password != fields.password {
                errors.insert(Field::ConfirmPassword, FieldError::PasswordMismatch);
            }
        }
        AuthMode::Login => match existing {
            None if !email.is_empty() => {
                errors.insert(Field::Email, FieldError::AccountNotFound);
            }
            Some(entry) if !fields.password.is_empty() && entry.password != fields.password => {
                errors.insert(Field::Password, FieldError::WrongPassword);
            }
            _ => {}
        },
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: usize = 6;

    fn ann() -> CredentialEntry {
        CredentialEntry {
            email: "ann@x.com".to_string(),
            name: "Ann".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("ann@x"));
        assert!(!is_valid_email("ann.x.com"));
        assert!(!is_valid_email("ann @x.com"));
        assert!(!is_valid_email("ann@@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@x."));
    }

    #[test]
    fn test_valid_signup_has_no_errors() {
        let fields = AuthFields::signup("Ann", "ann@x.com", "secret", "secret");
        assert!(validate_fields(AuthMode::Signup, &fields, None, MIN).is_empty());
    }

    #[test]
    fn test_blank_name_on_signup() {
        let fields = AuthFields::signup("   ", "ann@x.com", "secret", "secret");
        let errors = validate_fields(AuthMode::Signup, &fields, None, MIN);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::NameRequired));
    }

    #[test]
    fn test_name_ignored_on_login() {
        let fields = AuthFields::login("ann@x.com", "secret");
        let entry = ann();
        assert!(validate_fields(AuthMode::Login, &fields, Some(&entry), MIN).is_empty());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let fields = AuthFields::signup("", "", "", "");
        let errors = validate_fields(AuthMode::Signup, &fields, None, MIN);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::EmailRequired));
        assert_eq!(errors.get(Field::Password), Some(&FieldError::PasswordRequired));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some(&FieldError::ConfirmRequired)
        );
    }

    #[test]
    fn test_invalid_email_regardless_of_other_fields() {
        for email in ["nope", "a@b", "a b@c.d", "x@y@z.com"] {
            let ok_otherwise = AuthFields::signup("Ann", email, "secret", "secret");
            let errors = validate_fields(AuthMode::Signup, &ok_otherwise, None, MIN);
            assert_eq!(errors.get(Field::Email), Some(&FieldError::EmailInvalid));

            let bad_otherwise = AuthFields::signup("", email, "x", "y");
            let errors = validate_fields(AuthMode::Signup, &bad_otherwise, None, MIN);
            assert_eq!(errors.get(Field::Email), Some(&FieldError::EmailInvalid));

            let login = AuthFields::login(email, "secret");
            let errors = validate_fields(AuthMode::Login, &login, None, MIN);
            assert_eq!(errors.get(Field::Email), Some(&FieldError::EmailInvalid));
        }
    }

    #[test]
    fn test_password_length_boundary() {
        let six = AuthFields::signup("Ann", "ann@x.com", "abcdef", "abcdef");
        assert!(validate_fields(AuthMode::Signup, &six, None, MIN).is_empty());

        let five = AuthFields::signup("Ann", "ann@x.com", "abcde", "abcde");
        let errors = validate_fields(AuthMode::Signup, &five, None, MIN);
        assert_eq!(
            errors.get(Field::Password),
            Some(&FieldError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_password_mismatch() {
        let fields = AuthFields::signup("Ann", "ann@x.com", "secret", "secreT");
        let errors = validate_fields(AuthMode::Signup, &fields, None, MIN);
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some(&FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_login_unknown_account() {
        let fields = AuthFields::login("nobody@x.com", "secret");
        let errors = validate_fields(AuthMode::Login, &fields, None, MIN);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(&FieldError::AccountNotFound));
    }

    #[test]
    fn test_login_wrong_password() {
        let entry = ann();
        let fields = AuthFields::login("ann@x.com", "wrong-one");
        let errors = validate_fields(AuthMode::Login, &fields, Some(&entry), MIN);
        assert_eq!(errors.get(Field::Password), Some(&FieldError::WrongPassword));
        assert!(!errors.has(Field::Email));
    }

    #[test]
    fn test_login_account_checks_skip_empty_fields() {
        let entry = ann();

        let no_password = AuthFields::login("ann@x.com", "");
        let errors = validate_fields(AuthMode::Login, &no_password, Some(&entry), MIN);
        assert_eq!(errors.get(Field::Password), Some(&FieldError::PasswordRequired));
        assert!(!errors.contains(&FieldError::WrongPassword));

        let no_email = AuthFields::login("", "secret");
        let errors = validate_fields(AuthMode::Login, &no_email, None, MIN);
        assert_eq!(errors.get(Field::Email), Some(&FieldError::EmailRequired));
        assert!(!errors.contains(&FieldError::AccountNotFound));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
        let mut errors = FieldErrors::new();
        errors.insert(Field::Password, FieldError::PasswordRequired);
        errors.insert(Field::Email, FieldError::EmailRequired);
        errors.insert(Field::Email, FieldError::EmailInvalid);
        assert_eq!(
            errors.to_string(),
            "email: Email is required; password: Password is required"
        );
    }
}
