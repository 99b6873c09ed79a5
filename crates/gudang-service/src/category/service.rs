//! Category catalog operations.

use std::sync::Arc;

use tracing::info;

use gudang_core::error::AppError;
use gudang_database::repositories::category::CategoryRepository;
use gudang_entity::category::model::{Category, CreateCategory};

/// Manages item categories.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Lists all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repo.find_all().await
    }

    /// Creates a category. The slug is normalized to lowercase kebab case;
    /// the display name defaults to the centralized mapping when omitted.
    pub async fn create_category(
        &self,
        slug: String,
        name: Option<String>,
    ) -> Result<Category, AppError> {
        let slug = slug.trim().to_lowercase().replace(' ', "-");
        if slug.is_empty() {
            return Err(AppError::validation("Category slug is required"));
        }

        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| gudang_entity::category::display_name(&slug));

        let category = self
            .category_repo
            .create(&CreateCategory { slug, name })
            .await?;

        info!(category_id = category.id, slug = %category.slug, "Category created");

        Ok(category)
    }
}
