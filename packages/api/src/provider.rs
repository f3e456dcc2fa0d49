//! Social sign-in providers offered under "Or continue with".

use std::fmt;
use std::str::FromStr;

use crate::AuthError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::Facebook];

    /// Display name, as printed on the button.
    pub fn name(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Facebook => "Facebook",
        }
    }

    /// Lowercase identifier, also the domain of the synthetic email.
    pub fn id(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AuthError::UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider() {
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!("Facebook".parse::<Provider>().unwrap(), Provider::Facebook);
        assert_eq!(" GOOGLE ".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!(
            "github".parse::<Provider>(),
            Err(AuthError::UnknownProvider("github".to_string()))
        );
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::Google.to_string(), "Google");
        assert_eq!(Provider::Facebook.id(), "facebook");
    }
}
