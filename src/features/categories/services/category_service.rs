use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryMap};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Every category as an id-to-label map. Fails with NotFound when none exist.
    pub async fn list_map(&self) -> Result<CategoryMap> {
        let categories = self.repository.list_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }

        Ok(category_map(categories))
    }
}
