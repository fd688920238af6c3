use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category id to label, serialized as a JSON object keyed by the id
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id-to-label map the frontend renders its category list from
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub success: bool,
    #[schema(value_type = BTreeMap<String, String>, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

impl CategoryListResponseDto {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}
