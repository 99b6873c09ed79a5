//! User management operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use gudang_auth::PasswordHasher;
use gudang_core::config::auth::AuthConfig;
use gudang_core::error::AppError;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_database::repositories::user::UserRepository;
use gudang_entity::user::model::CreateUser;
use gudang_entity::user::{User, UserRole};

/// Handles user lookup and registration.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Auth policy settings.
    config: AuthConfig,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>, config: AuthConfig) -> Self {
        Self {
            user_repo,
            hasher,
            config,
        }
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Lists users with pagination.
    pub async fn list_users(&self, page: PageRequest) -> Result<PageResponse<User>, AppError> {
        self.user_repo.find_all(&page).await
    }

    /// Registers a new user. The password is hashed with Argon2id; no
    /// plaintext or bcrypt credential is ever written for new accounts.
    pub async fn create_user(
        &self,
        username: String,
        email: String,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if password.len() < self.config.min_password_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username,
                email,
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User created");

        Ok(user)
    }
}
