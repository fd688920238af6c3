use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::post_questions,
        questions_handlers::delete_question,
        questions_handlers::list_questions_by_category,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            ErrorResponse,
            // Categories
            categories_dtos::CategoryListResponseDto,
            // Questions
            questions_dtos::QuestionDto,
            questions_dtos::QuestionsPostDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::QuestionSearchResponseDto,
            questions_dtos::QuestionCreatedResponseDto,
            questions_dtos::QuestionsPostResponseDto,
            questions_dtos::QuestionDeletedResponseDto,
            questions_dtos::CategoryQuestionsResponseDto,
            // Quizzes
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question bank: listing, search, creation and deletion"),
        (name = "quizzes", description = "Random unseen question for quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Categories, question bank and quiz endpoints",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
