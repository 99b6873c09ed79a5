//! Password hashing and credential verification.

pub mod hasher;
pub mod verifier;

pub use hasher::PasswordHasher;
pub use verifier::{CredentialCheck, CredentialScheme, CredentialVerifier};
