//! # Authentication backend
//!
//! [`AuthBackend`] is the two-operation interface the auth screen depends on.
//! [`MockBackend`] implements it entirely in memory:
//!
//! 1. Look up the trimmed email in the [`CredentialStore`] (login mode only).
//! 2. Run [`store::validate_fields`]. Any error returns right away as
//!    [`AuthError::Validation`] and nothing is written.
//! 3. Sleep for `submit_delay_ms` to stand in for the network round trip.
//! 4. Sign-up inserts a [`CredentialEntry`] (an existing entry for the same email
//!    is overwritten); sign-in reads the stored name back. Either way the caller
//!    gets a [`UserRecord`].
//!
//! Each call completes exactly once. There is no timeout and no cancellation;
//! the UI keeps its submit button disabled until the future resolves.

use store::{
    validate_fields, AuthConfig, AuthFields, AuthMode, CredentialEntry, CredentialStore, Field,
    FieldError, FieldErrors, MemoryCredentialStore, UserRecord,
};

use crate::latency::simulate_latency;
use crate::{AuthError, Provider};

/// Async interface for signing users in.
pub trait AuthBackend {
    /// Validate the auth form and, if it passes, register or sign in.
    fn validate_and_submit(
        &self,
        mode: AuthMode,
        fields: AuthFields,
    ) -> impl std::future::Future<Output = Result<UserRecord, AuthError>>;

    /// Sign in through a social provider. Always succeeds.
    fn login_with_provider(
        &self,
        provider: Provider,
    ) -> impl std::future::Future<Output = UserRecord>;
}

/// In-memory backend used by the demo. Clones share one credential store.
#[derive(Clone, Debug, Default)]
pub struct MockBackend<S = MemoryCredentialStore> {
    store: S,
    config: AuthConfig,
}

impl MockBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_store(MemoryCredentialStore::new(), config)
    }
}

impl<S: CredentialStore> MockBackend<S> {
    pub fn with_store(store: S, config: AuthConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl<S: CredentialStore> AuthBackend for MockBackend<S> {
    async fn validate_and_submit(
        &self,
        mode: AuthMode,
        fields: AuthFields,
    ) -> Result<UserRecord, AuthError> {
        let email = fields.email.trim().to_string();

        let existing = match mode {
            AuthMode::Login if !email.is_empty() => self.store.find(&email).await,
            _ => None,
        };

        let errors = validate_fields(
            mode,
            &fields,
            existing.as_ref(),
            self.config.min_password_len,
        );
        if !errors.is_empty() {
            tracing::debug!("Rejected {:?} for {:?}: {}", mode, email, errors);
            return Err(AuthError::Validation(errors));
        }

        simulate_latency(self.config.submit_delay()).await;

        let user = match mode {
            AuthMode::Signup => {
                let entry = CredentialEntry {
                    email,
                    name: fields.name.trim().to_string(),
                    password: fields.password,
                };
                let user = entry.to_user();
                self.store.insert(entry).await;
                tracing::info!("Registered account {}", user.email);
                user
            }
            AuthMode::Login => {
                // Validation already reports AccountNotFound when the lookup misses.
                let entry = existing.ok_or_else(|| {
                    let mut errors = FieldErrors::new();
                    errors.insert(Field::Email, FieldError::AccountNotFound);
                    AuthError::Validation(errors)
                })?;
                tracing::info!("Signed in {}", entry.email);
                entry.to_user()
            }
        };

        Ok(user)
    }

    async fn login_with_provider(&self, provider: Provider) -> UserRecord {
        simulate_latency(self.config.provider_delay()).await;
        tracing::info!("Signed in with {}", provider);
        UserRecord {
            name: format!("{} User", provider.name()),
            email: format!("user@{}.com", provider.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;

    fn backend() -> MockBackend {
        MockBackend::new(AuthConfig::default())
    }

    async fn sign_up(backend: &MockBackend, name: &str, email: &str, password: &str) {
        backend
            .validate_and_submit(
                AuthMode::Signup,
                AuthFields::signup(name, email, password, password),
            )
            .await
            .unwrap();
    }

    fn errors_of(result: Result<UserRecord, AuthError>) -> FieldErrors {
        match result {
            Err(AuthError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_returns_user() {
        let backend = backend();
        let user = backend
            .validate_and_submit(
                AuthMode::Signup,
                AuthFields::signup("Ann", "ann@x.com", "secret", "secret"),
            )
            .await
            .unwrap();

        assert_eq!(user, UserRecord::new("Ann", "ann@x.com"));
        assert_eq!(backend.store().len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_blank_name_creates_nothing() {
        let backend = backend();
        let result = backend
            .validate_and_submit(
                AuthMode::Signup,
                AuthFields::signup(" ", "ann@x.com", "secret", "secret"),
            )
            .await;

        let errors = errors_of(result);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::NameRequired));
        assert_eq!(backend.store().len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_then_login_roundtrip() {
        let backend = backend();
        sign_up(&backend, "Ann", "ann@x.com", "secret").await;

        let user = backend
            .validate_and_submit(AuthMode::Login, AuthFields::login("ann@x.com", "secret"))
            .await
            .unwrap();
        assert_eq!(user, UserRecord::new("Ann", "ann@x.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_is_idempotent() {
        let backend = backend();
        sign_up(&backend, "Ann", "ann@x.com", "secret").await;

        let login = || {
            backend.validate_and_submit(AuthMode::Login, AuthFields::login("ann@x.com", "secret"))
        };
        let first = login().await.unwrap();
        let second = login().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.store().len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_unknown_account() {
        let backend = backend();
        let result = backend
            .validate_and_submit(AuthMode::Login, AuthFields::login("nobody@x.com", "secret"))
            .await;

        let errors = errors_of(result);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(&FieldError::AccountNotFound));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_wrong_password() {
        let backend = backend();
        sign_up(&backend, "Ann", "ann@x.com", "secret").await;

        let result = backend
            .validate_and_submit(AuthMode::Login, AuthFields::login("ann@x.com", "secret2"))
            .await;
        let errors = errors_of(result);
        assert_eq!(errors.get(Field::Password), Some(&FieldError::WrongPassword));
    }

    #[tokio::test(start_paused = true)]
    async fn test_password_boundary() {
        let backend = backend();
        let short = backend
            .validate_and_submit(
                AuthMode::Signup,
                AuthFields::signup("Bo", "bo@x.com", "12345", "12345"),
            )
            .await;
        assert_eq!(
            errors_of(short).get(Field::Password),
            Some(&FieldError::PasswordTooShort { min: 6 })
        );

        let exact = backend
            .validate_and_submit(
                AuthMode::Signup,
                AuthFields::signup("Bo", "bo@x.com", "123456", "123456"),
            )
            .await;
        assert!(exact.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_signup_overwrites() {
        let backend = backend();
        sign_up(&backend, "Ann", "ann@x.com", "secret").await;
        sign_up(&backend, "Annie", "ann@x.com", "another").await;

        assert_eq!(backend.store().len().await, 1);
        let user = backend
            .validate_and_submit(AuthMode::Login, AuthFields::login("ann@x.com", "another"))
            .await
            .unwrap();
        assert_eq!(user.name, "Annie");
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_trims_name_and_email() {
        let backend = backend();
        let user = backend
            .validate_and_submit(
                AuthMode::Signup,
                AuthFields::signup("  Ann  ", " ann@x.com ", "secret", "secret"),
            )
            .await
            .unwrap();
        assert_eq!(user, UserRecord::new("Ann", "ann@x.com"));
        assert!(backend.store().find("ann@x.com").await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_configured_delay() {
        let backend = backend();
        let start = Instant::now();
        sign_up(&backend, "Ann", "ann@x.com", "secret").await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_returns_immediately() {
        let backend = backend();
        let start = Instant::now();
        let result = backend
            .validate_and_submit(AuthMode::Login, AuthFields::login("", ""))
            .await;
        assert!(result.is_err());
        assert!(start.elapsed() < backend.config().submit_delay());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_with_provider() {
        let backend = backend();
        let start = Instant::now();

        let user = backend.login_with_provider(Provider::Google).await;
        assert_eq!(user, UserRecord::new("Google User", "user@google.com"));
        assert!(start.elapsed() >= Duration::from_secs(1));

        let user = backend.login_with_provider(Provider::Facebook).await;
        assert_eq!(user, UserRecord::new("Facebook User", "user@facebook.com"));
        assert_eq!(backend.store().len().await, 0);
    }

    #[tokio::test]
    async fn test_zero_delay_config() {
        let config = AuthConfig {
            submit_delay_ms: 0,
            provider_delay_ms: 0,
            ..AuthConfig::default()
        };
        let backend = MockBackend::new(config);
        sign_up(&backend, "Ann", "ann@x.com", "secret").await;
        assert_eq!(
            backend.login_with_provider(Provider::Google).await.name,
            "Google User"
        );
    }
}
