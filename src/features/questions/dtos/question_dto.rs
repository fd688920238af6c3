use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::Question;
use crate::shared::validation::{FlexibleInt, FlexibleText};

/// Serialized form of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Body of `POST /questions`.
///
/// A non-empty `searchTerm` turns the request into a search; otherwise the four
/// question fields are required and a question is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuestionsPostDto {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,

    #[validate(required(message = "question is required"))]
    #[schema(value_type = Option<String>)]
    pub question: Option<FlexibleText>,

    #[validate(required(message = "answer is required"))]
    #[schema(value_type = Option<String>)]
    pub answer: Option<FlexibleText>,

    /// Integer or numeric string
    #[validate(required(message = "difficulty is required"))]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<FlexibleInt>,

    /// Category id, integer or numeric string
    #[validate(required(message = "category is required"))]
    #[schema(value_type = Option<i32>)]
    pub category: Option<FlexibleInt>,
}

impl QuestionsPostDto {
    /// The search term, if this request is a search
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    #[schema(value_type = std::collections::BTreeMap<String, String>)]
    pub categories: CategoryMap,
}

/// Response DTO for a search through `POST /questions`.
///
/// `total_questions` counts the whole bank, not the matches.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionSearchResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Response DTO for a creation through `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedResponseDto {
    pub success: bool,
    /// Id of the new question
    pub created: i32,
    pub question_created: String,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Either outcome of `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionsPostResponseDto {
    Created(QuestionCreatedResponseDto),
    Search(QuestionSearchResponseDto),
}

/// Response DTO for `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDeletedResponseDto {
    pub success: bool,
    pub deleted: i32,
}

/// Response DTO for `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    /// Label of the requested category
    pub current_category: String,
}
