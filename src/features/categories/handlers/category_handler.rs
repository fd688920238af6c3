use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryListResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
///
/// Returns an object mapping each category id to its label.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category map", body = CategoryListResponseDto),
        (status = 404, description = "No categories exist", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponseDto>> {
    let categories = service.list_map().await?;
    Ok(Json(CategoryListResponseDto::new(categories)))
}
