use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, QuestionDeletedResponseDto, QuestionListResponseDto,
    QuestionsPostDto, QuestionsPostResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let result = service.list_page(query.page()).await?;
    Ok(Json(result))
}

/// Search or create questions
///
/// With a non-empty `searchTerm` the body is a search; otherwise it must carry
/// `question`, `answer`, `difficulty` and `category` and a question is created.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = QuestionsPostDto,
    responses(
        (status = 200, description = "Search results or created question", body = QuestionsPostResponseDto),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 404, description = "Search matched nothing", body = ErrorResponse),
        (status = 422, description = "Missing field or insert failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn post_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(dto): AppJson<QuestionsPostDto>,
) -> Result<Json<QuestionsPostResponseDto>> {
    let response = match dto.search_term() {
        Some(term) => QuestionsPostResponseDto::Search(service.search(term, query.page()).await?),
        None => QuestionsPostResponseDto::Created(service.create(dto, query.page()).await?),
    };
    Ok(Json(response))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionDeletedResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<QuestionDeletedResponseDto>> {
    let result = service.delete(id).await?;
    Ok(Json(result))
}

/// List questions of one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsResponseDto),
        (status = 400, description = "Unknown category", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let result = service.list_by_category(id, query.page()).await?;
    Ok(Json(result))
}
