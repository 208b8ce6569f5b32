//! Credential resolution
//!
//! The OpenRouter bearer token is an explicit value handed to the dispatcher
//! when it is built; this module decides where the value comes from. An
//! explicit flag wins over the environment, and a missing credential is
//! reported before any request exists.

/// Environment variable consulted when no explicit key is given
pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

/// Where a resolved credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Passed on the command line
    Flag,
    /// Read from the environment
    Environment,
}

/// A resolved API credential
#[derive(Clone)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    /// The bearer token value
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Where the token was found
    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Consume the credential, yielding the bearer token
    pub fn into_token(self) -> String {
        self.token
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a credential: an explicit value wins, then the environment.
pub fn resolve(explicit: Option<String>) -> Option<Credential> {
    resolve_with_env(explicit, std::env::var(API_KEY_ENV_VAR).ok())
}

/// Resolution against an already-read environment value
pub fn resolve_with_env(
    explicit: Option<String>,
    env_value: Option<String>,
) -> Option<Credential> {
    if let Some(token) = explicit.filter(|t| !t.trim().is_empty()) {
        return Some(Credential {
            token,
            source: CredentialSource::Flag,
        });
    }

    env_value
        .filter(|t| !t.trim().is_empty())
        .map(|token| Credential {
            token,
            source: CredentialSource::Environment,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let credential = resolve_with_env(
            Some("from-flag".to_string()),
            Some("from-env".to_string()),
        )
        .unwrap();
        assert_eq!(credential.token(), "from-flag");
        assert_eq!(credential.source(), CredentialSource::Flag);
    }

    #[test]
    fn test_environment_fallback() {
        let credential = resolve_with_env(None, Some("from-env".to_string())).unwrap();
        assert_eq!(credential.token(), "from-env");
        assert_eq!(credential.source(), CredentialSource::Environment);
    }

    #[test]
    fn test_blank_flag_falls_through() {
        let credential = resolve_with_env(
            Some("   ".to_string()),
            Some("from-env".to_string()),
        )
        .unwrap();
        assert_eq!(credential.source(), CredentialSource::Environment);
    }

    #[test]
    fn test_missing_everywhere() {
        assert!(resolve_with_env(None, None).is_none());
        assert!(resolve_with_env(Some(String::new()), Some("  ".to_string())).is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = resolve_with_env(Some("secret-token".to_string()), None).unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
