use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::questions::dtos::QuestionDto;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Returns a random question from the chosen category (or all categories when
/// `quiz_category.id` is 0) that is not in `previous_questions`. When none is left
/// the response has no `question` field.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or none when the quiz is over", body = QuizResponseDto),
        (status = 400, description = "Missing previous_questions or quiz_category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let request = dto.into_request()?;
    let question = service.next_question(&request).await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question: question.map(QuestionDto::from),
    }))
}
