//! # App configuration (`signmate.toml`)
//!
//! Optional TOML file that tunes the demo without rebuilding it. Native builds
//! read it from `<config_dir>/signmate/signmate.toml` (see [`AppConfig::load`]);
//! wasm builds always use the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [auth]
//! submit_delay_ms = 1500     # simulated round trip for email sign-in/sign-up
//! provider_delay_ms = 1000   # simulated round trip for Google/Facebook buttons
//! min_password_len = 6
//!
//! [navigation]
//! start_screen = "home"      # or "onboarding" to skip the marketing page
//! require_auth = true        # false goes straight from onboarding to the app
//! ```
//!
//! Every field has a default, so a missing file, a missing section or an empty
//! file all mean [`AppConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `signmate.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Mock backend tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_provider_delay")]
    pub provider_delay_ms: u64,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

fn default_submit_delay() -> u64 {
    1500
}

fn default_provider_delay() -> u64 {
    1000
}

fn default_min_password_len() -> usize {
    6
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            provider_delay_ms: default_provider_delay(),
            min_password_len: default_min_password_len(),
        }
    }
}

impl AuthConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn provider_delay(&self) -> Duration {
        Duration::from_millis(self.provider_delay_ms)
    }
}

/// First screen shown on launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Home,
    Onboarding,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub start_screen: StartScreen,
    #[serde(default = "default_require_auth")]
    pub require_auth: bool,
}

fn default_require_auth() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start_screen: StartScreen::default(),
            require_auth: default_require_auth(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "signmate.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the platform config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            match dirs::config_dir() {
                Some(dir) => Self::load_from(&dir.join("signmate").join(Self::filename())),
                None => Self::default(),
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Load from an explicit path. Missing file means defaults; a malformed one
    /// is logged and ignored.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_toml(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
