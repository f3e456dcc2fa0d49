//! # Credential storage seam
//!
//! [`CredentialStore`] is the async interface the auth backend talks to. The only
//! implementation is [`crate::MemoryCredentialStore`], a process-lifetime map that
//! forgets everything when the app exits. A real account service would sit behind
//! this trait (or behind `api::AuthBackend` one level up) without the UI noticing.
//!
//! The methods return plain futures with no `Send` bound so the same code runs on
//! the single-threaded wasm executor.

use crate::models::CredentialEntry;

/// Async trait for looking up and registering mock accounts.
pub trait CredentialStore {
    /// Fetch the entry registered under exactly `email`.
    fn find(&self, email: &str) -> impl std::future::Future<Output = Option<CredentialEntry>>;

    /// Insert `entry`, replacing any entry with the same email.
    fn insert(&self, entry: CredentialEntry) -> impl std::future::Future<Output = ()>;

    fn len(&self) -> impl std::future::Future<Output = usize>;
}
