//! State behind the auth screen's form.

use api::AuthError;
use store::{AuthFields, AuthMode, Field, FieldError, FieldErrors, UserRecord};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    fields: AuthFields,
    errors: FieldErrors,
    pending: bool,
    show_password: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &AuthFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Password => &self.fields.password,
            Field::ConfirmPassword => &self.fields.confirm_password,
        }
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Update one input. Editing a field clears its inline error.
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Password => &mut self.fields.password,
            Field::ConfirmPassword => &mut self.fields.confirm_password,
        };
        *slot = value;
        self.errors.remove(field);
    }

    /// Switching between sign-in and sign-up starts from an empty form.
    pub fn switch_mode(&mut self) {
        self.fields = AuthFields::default();
        self.errors.clear();
    }

    /// The screen may only be left once no submission is in flight, so a
    /// pending sign-up always reaches the credential store.
    pub fn can_leave(&self) -> bool {
        !self.pending
    }

    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.errors.clear();
        true
    }

    /// Record the outcome of a submission. The form is re-enabled either way;
    /// the user is returned on success.
    pub fn finish_submit(&mut self, result: Result<UserRecord, AuthError>) -> Option<UserRecord> {
        self.pending = false;
        match result {
            Ok(user) => Some(user),
            Err(AuthError::Validation(errors)) => {
                self.errors = errors;
                None
            }
            Err(e) => {
                tracing::warn!("Sign-in failed: {}", e);
                None
            }
        }
    }
}

/// Per-mode text of the auth screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
    pub switch_prompt: &'static str,
    pub switch_action: &'static str,
}

impl AuthCopy {
    pub fn for_mode(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Self {
                title: "Welcome back to SignMate",
                subtitle: "Continue your ISL learning journey",
                submit: "Sign In to SignMate",
                switch_prompt: "Don't have a SignMate account?",
                switch_action: "Sign Up",
            },
            AuthMode::Signup => Self {
                title: "Join SignMate",
                subtitle: "Start your ISL learning adventure",
                submit: "Create SignMate Account",
                switch_prompt: "Already have a SignMate account?",
                switch_action: "Sign In",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{AuthBackend, MockBackend};
    use store::AuthConfig;

    fn filled() -> AuthForm {
        let mut form = AuthForm::new();
        form.set_field(Field::Name, "Ann".to_string());
        form.set_field(Field::Email, "ann@x.com".to_string());
        form.set_field(Field::Password, "secret".to_string());
        form.set_field(Field::ConfirmPassword, "secret".to_string());
        form
    }

    #[test]
    fn test_resubmission_is_blocked_while_pending() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(form.is_pending());
        assert!(!form.begin_submit());

        form.finish_submit(Ok(UserRecord::new("Ann", "ann@x.com")));
        assert!(!form.is_pending());
        assert!(form.begin_submit());
    }

    #[test]
    fn test_cannot_leave_while_pending() {
        let mut form = filled();
        assert!(form.can_leave());

        form.begin_submit();
        assert!(!form.can_leave());

        form.finish_submit(Ok(UserRecord::new("Ann", "ann@x.com")));
        assert!(form.can_leave());
    }

    #[test]
    fn test_failure_reenables_and_shows_errors() {
        let mut form = filled();
        form.begin_submit();

        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, FieldError::AccountNotFound);
        let user = form.finish_submit(Err(AuthError::Validation(errors)));

        assert!(user.is_none());
        assert!(!form.is_pending());
        assert_eq!(form.error(Field::Email), Some(&FieldError::AccountNotFound));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = filled();
        form.begin_submit();
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, FieldError::EmailInvalid);
        errors.insert(Field::Password, FieldError::WrongPassword);
        form.finish_submit(Err(AuthError::Validation(errors)));

        form.set_field(Field::Email, "ann@y.com".to_string());
        assert!(form.error(Field::Email).is_none());
        assert_eq!(form.error(Field::Password), Some(&FieldError::WrongPassword));
    }

    #[test]
    fn test_switch_mode_clears_form() {
        let mut form = filled();
        form.toggle_show_password();
        form.switch_mode();
        assert_eq!(form.fields(), &AuthFields::default());
        assert!(form.errors().is_empty());
        assert!(form.show_password());
    }

    #[test]
    fn test_copy_per_mode() {
        assert_eq!(AuthCopy::for_mode(AuthMode::Login).submit, "Sign In to SignMate");
        assert_eq!(AuthCopy::for_mode(AuthMode::Signup).title, "Join SignMate");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_through_backend() {
        let backend = MockBackend::new(AuthConfig::default());
        let mut form = filled();

        assert!(form.begin_submit());
        let result = backend
            .validate_and_submit(AuthMode::Signup, form.fields().clone())
            .await;
        let user = form.finish_submit(result);

        assert_eq!(user, Some(UserRecord::new("Ann", "ann@x.com")));
        assert!(!form.is_pending());
    }
}
