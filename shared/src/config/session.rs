//! Session cookie configuration module

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Configuration for the server-side session and its cookie
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Cookie name
    pub cookie_name: String,

    /// Session lifetime in days
    pub ttl_days: i64,

    /// Mark the cookie `Secure` (HTTPS only)
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("session"),
            ttl_days: 30,
            secure: false,
        }
    }
}

impl SessionConfig {
    /// Create configuration appropriate for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        let ttl_days = std::env::var("SESSION_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self {
            cookie_name: String::from("session"),
            ttl_days,
            secure: environment.is_production(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_only_in_production() {
        assert!(SessionConfig::for_environment(Environment::Production).secure);
        assert!(!SessionConfig::for_environment(Environment::Development).secure);
    }
}
