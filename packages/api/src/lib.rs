//! # API crate: the mock SignMate authentication backend
//!
//! Every screen that needs an account goes through [`AuthBackend`]. The only
//! implementation, [`MockBackend`], keeps accounts in a [`store::CredentialStore`]
//! for the lifetime of the process and fakes network latency with a timer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`AuthBackend`] trait and [`MockBackend`]: email sign-in/sign-up and social sign-in |
//! | [`provider`] | Social sign-in providers shown on the auth screen |
//! | `error` | [`AuthError`], the failure type of every backend call |
//! | `latency` | Platform-aware sleep used to simulate the round trip |
//!
//! ## Operations
//!
//! - [`AuthBackend::validate_and_submit`] validates the form, then registers
//!   (sign-up) or checks (sign-in) the credentials after the configured delay.
//!   Validation failures come back immediately as [`AuthError::Validation`].
//! - [`AuthBackend::login_with_provider`] skips validation and always succeeds
//!   after a shorter delay with a synthetic `"<Provider> User"` account.

pub mod backend;
mod error;
mod latency;
pub mod provider;

pub use backend::{AuthBackend, MockBackend};
pub use error::AuthError;
pub use provider::Provider;

pub use store::{AuthFields, AuthMode, Field, FieldError, FieldErrors, UserRecord};
