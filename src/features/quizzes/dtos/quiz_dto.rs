use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;
use crate::shared::validation::FlexibleInt;

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of the questions already played in this quiz
    #[validate(required(message = "previous_questions is required"))]
    pub previous_questions: Option<Vec<i64>>,

    #[validate(required(message = "quiz_category is required"))]
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Category picked by the player. Extra fields such as `type` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category id, integer or numeric string; 0 selects every category
    #[schema(value_type = Option<i32>, example = 1)]
    pub id: Option<FlexibleInt>,
}

/// Validated quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub category_id: i32,
}

impl QuizRequestDto {
    /// Check required fields and convert the category id. Every failure is BadRequest.
    pub fn into_request(self) -> Result<QuizRequest> {
        self.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let category_id = self
            .quiz_category
            .and_then(|c| c.id)
            .and_then(|id| id.to_i32())
            .ok_or_else(|| {
                AppError::BadRequest("quiz_category.id must be an integer".to_string())
            })?;

        Ok(QuizRequest {
            previous_questions: self.previous_questions.unwrap_or_default(),
            category_id,
        })
    }
}

/// Response DTO for `POST /quizzes`.
///
/// `question` is omitted once every candidate has been played.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionDto>,
}
