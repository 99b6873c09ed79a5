//! Category repository implementation.

use sqlx::PgPool;

use gudang_core::error::AppError;
use gudang_core::result::AppResult;
use gudang_entity::category::model::{Category, CreateCategory};

use crate::connection::map_db_error;

/// Repository for category CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories.
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list categories", e))
    }

    /// Find a category by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find category", e))
    }

    /// Create a new category.
    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (slug, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_slug_key") =>
            {
                AppError::conflict(format!("Category '{}' already exists", data.slug))
            }
            _ => map_db_error("Failed to create category", e),
        })
    }

    /// Count total categories.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count categories", e))?;
        Ok(count as u64)
    }
}
