use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::DEFAULT_PAGE;

/// Uniform error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// HTTP status code, repeated in the body
    #[schema(example = 404)]
    pub error: u16,
    #[schema(example = "resource not found")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: &str) -> Self {
        Self {
            success: false,
            error,
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter shared by every question listing.
///
/// A value that is not an integer is ignored and the default page is served.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "lenient_page")]
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<i64>,
}

impl PageQuery {
    /// Requested page, clamped to 1 or above
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse::<i64>().ok()))
}
