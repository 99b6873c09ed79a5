//! Login verification and legacy-credential migration.

use std::sync::Arc;

use tracing::{info, warn};

use gudang_auth::CredentialVerifier;
use gudang_core::error::AppError;
use gudang_database::repositories::user::UserRepository;
use gudang_entity::user::User;

/// Handles email+password login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Credential verifier.
    verifier: Arc<CredentialVerifier>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(user_repo: Arc<UserRepository>, verifier: Arc<CredentialVerifier>) -> Self {
        Self {
            user_repo,
            verifier,
        }
    }

    /// Verify an email+password pair and return the matching user.
    ///
    /// Unknown email and wrong password return the same error, so callers
    /// cannot probe which addresses are registered. When a legacy
    /// (bcrypt/plaintext) credential verifies, it is re-hashed to Argon2id
    /// and stored before the user is returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let check = self.verifier.verify(password, &user.password_hash)?;
        if !check.valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        if check.needs_rehash {
            // The migration is best-effort: a failed rehash must not block
            // an otherwise valid login.
            match self.verifier.rehash(password) {
                Ok(new_hash) => {
                    if let Err(e) = self
                        .user_repo
                        .update_password_hash(user.id, &new_hash)
                        .await
                    {
                        warn!(user_id = %user.id, error = %e, "Failed to migrate legacy credential");
                    } else {
                        info!(user_id = %user.id, "Migrated legacy credential to Argon2id");
                    }
                }
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "Failed to re-hash legacy credential");
                }
            }
        }

        self.user_repo.update_last_login(user.id).await?;

        info!(user_id = %user.id, "User logged in");

        Ok(user)
    }
}
