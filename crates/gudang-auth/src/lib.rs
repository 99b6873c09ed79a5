//! # gudang-auth
//!
//! Credential verification for Gudang Mitra.
//!
//! The stored credential corpus is mixed: Argon2id hashes (current),
//! bcrypt hashes (imported), and plaintext (legacy seed accounts). One
//! polymorphic verifier handles all three and reports when a credential
//! should be re-hashed.

pub mod password;

pub use password::{CredentialCheck, CredentialScheme, CredentialVerifier, PasswordHasher};
