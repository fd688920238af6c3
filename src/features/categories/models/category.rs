use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    /// Display label, e.g. "Science"
    #[sqlx(rename = "type")]
    pub category_type: String,
}
