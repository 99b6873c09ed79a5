//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether legacy plaintext-stored passwords may still authenticate.
    ///
    /// When a legacy credential verifies, it is re-hashed with Argon2id
    /// regardless of this flag; disabling it rejects such accounts outright.
    #[serde(default = "default_true")]
    pub allow_legacy_credentials: bool,
    /// Minimum accepted password length for newly created accounts.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_legacy_credentials: default_true(),
            min_password_length: default_min_password_length(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_password_length() -> usize {
    8
}
