//! Polymorphic credential verification.
//!
//! Stored credentials come in three shapes, detected from the stored
//! value itself. Legacy shapes still verify, but the check reports that
//! the credential should be re-hashed so the caller can migrate it.

use tracing::warn;

use gudang_core::error::AppError;

use super::hasher::PasswordHasher;

/// The hash scheme a stored credential uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScheme {
    /// Argon2id PHC string (current scheme).
    Argon2,
    /// bcrypt hash imported from the previous system.
    Bcrypt,
    /// Raw plaintext from legacy seed data.
    Plaintext,
}

impl CredentialScheme {
    /// Detect the scheme from a stored credential value.
    pub fn detect(stored: &str) -> Self {
        if stored.starts_with("$argon2") {
            Self::Argon2
        } else if stored.starts_with("$2a$") || stored.starts_with("$2b$") || stored.starts_with("$2y$") {
            Self::Bcrypt
        } else {
            Self::Plaintext
        }
    }

    /// Whether credentials in this scheme should be re-hashed on use.
    pub fn needs_rehash(&self) -> bool {
        !matches!(self, Self::Argon2)
    }
}

/// Outcome of a credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialCheck {
    /// Whether the password matched the stored credential.
    pub valid: bool,
    /// Whether the stored credential uses a legacy scheme and should be
    /// replaced with an Argon2id hash.
    pub needs_rehash: bool,
}

/// Verifies a password against a stored credential of any known scheme.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    hasher: PasswordHasher,
    /// Whether legacy (bcrypt/plaintext) credentials may authenticate.
    allow_legacy: bool,
}

impl CredentialVerifier {
    /// Creates a new verifier.
    pub fn new(hasher: PasswordHasher, allow_legacy: bool) -> Self {
        Self {
            hasher,
            allow_legacy,
        }
    }

    /// Verify `password` against `stored`, dispatching on the detected scheme.
    pub fn verify(&self, password: &str, stored: &str) -> Result<CredentialCheck, AppError> {
        let scheme = CredentialScheme::detect(stored);

        if scheme.needs_rehash() && !self.allow_legacy {
            warn!("Rejected login against legacy credential (legacy credentials disabled)");
            return Ok(CredentialCheck {
                valid: false,
                needs_rehash: scheme.needs_rehash(),
            });
        }

        let valid = match scheme {
            CredentialScheme::Argon2 => self.hasher.verify_password(password, stored)?,
            CredentialScheme::Bcrypt => bcrypt::verify(password, stored)
                .map_err(|e| AppError::internal(format!("bcrypt verification failed: {e}")))?,
            CredentialScheme::Plaintext => {
                warn!("Verifying against a plaintext-stored credential");
                constant_time_eq(password.as_bytes(), stored.as_bytes())
            }
        };

        Ok(CredentialCheck {
            valid,
            needs_rehash: scheme.needs_rehash(),
        })
    }

    /// Produce a fresh Argon2id hash for storage.
    pub fn rehash(&self, password: &str) -> Result<String, AppError> {
        self.hasher.hash_password(password)
    }
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier(allow_legacy: bool) -> CredentialVerifier {
        CredentialVerifier::new(PasswordHasher::new(), allow_legacy)
    }

    #[test]
    fn test_scheme_detection() {
        assert_eq!(
            CredentialScheme::detect("$argon2id$v=19$m=19456,t=2,p=1$abc$def"),
            CredentialScheme::Argon2
        );
        assert_eq!(
            CredentialScheme::detect("$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW"),
            CredentialScheme::Bcrypt
        );
        assert_eq!(
            CredentialScheme::detect("hunter2"),
            CredentialScheme::Plaintext
        );
    }

    #[test]
    fn test_argon2_verify() {
        let v = verifier(true);
        let hash = v.rehash("rahasia").unwrap();
        let check = v.verify("rahasia", &hash).unwrap();
        assert!(check.valid);
        assert!(!check.needs_rehash);
    }

    #[test]
    fn test_bcrypt_verify_flags_rehash() {
        let v = verifier(true);
        let hash = bcrypt::hash("rahasia", 4).unwrap();
        let check = v.verify("rahasia", &hash).unwrap();
        assert!(check.valid);
        assert!(check.needs_rehash);

        let wrong = v.verify("salah", &hash).unwrap();
        assert!(!wrong.valid);
    }

    #[test]
    fn test_plaintext_verify_flags_rehash() {
        let v = verifier(true);
        let check = v.verify("hunter2", "hunter2").unwrap();
        assert!(check.valid);
        assert!(check.needs_rehash);
        assert!(!v.verify("hunter3", "hunter2").unwrap().valid);
    }

    #[test]
    fn test_legacy_disabled_rejects() {
        let v = verifier(false);
        let check = v.verify("hunter2", "hunter2").unwrap();
        assert!(!check.valid);
    }
}
