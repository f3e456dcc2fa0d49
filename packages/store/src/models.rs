//! # Domain models for accounts and the auth form
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | The identity handed to the rest of the app after sign-in: a display `name` and the `email` it was registered under. |
//! | [`CredentialEntry`] | A stored mock signup. Holds the password in plaintext; this store is a demo stand-in and is never persisted. |
//! | [`AuthMode`] | Whether the auth form is signing in or creating an account. |
//! | [`AuthFields`] | Raw form input, exactly as typed. Trimming happens during validation. |

/// Minimal identity exposed to the app after authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// First word of the display name, used by greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Up to two uppercase initials for avatar badges: "Arjun Sharma" -> "AS".
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}

/// A mock account as stored by a [`crate::CredentialStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialEntry {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl CredentialEntry {
    pub fn to_user(&self) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Auth form input. `name` and `confirm_password` are ignored in login mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthFields {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}
