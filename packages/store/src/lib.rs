pub mod config;
pub mod credentials;
pub mod models;
pub mod validation;

mod memory;
pub use memory::MemoryCredentialStore;

pub use config::{AppConfig, AuthConfig, NavigationConfig, StartScreen};
pub use credentials::CredentialStore;
pub use models::{AuthFields, AuthMode, CredentialEntry, UserRecord};
pub use validation::{is_valid_email, validate_fields, Field, FieldError, FieldErrors};
