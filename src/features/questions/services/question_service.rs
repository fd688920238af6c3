use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::category_map;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, QuestionCreatedResponseDto, QuestionDeletedResponseDto,
    QuestionDto, QuestionListResponseDto, QuestionSearchResponseDto, QuestionsPostDto,
};
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::repositories::QuestionRepository;
use crate::shared::pagination::paginate;

/// Service for question bank operations
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// One page of the whole bank plus the category map.
    ///
    /// An empty page (no questions, or a page past the end) is NotFound.
    pub async fn list_page(&self, page: i64) -> Result<QuestionListResponseDto> {
        let selection = self.questions.list_all().await?;
        let total_questions = selection.len() as i64;
        let questions = page_of(selection, page);

        let categories = category_map(self.categories.list_all().await?);

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Page {} of questions is empty",
                page
            )));
        }

        Ok(QuestionListResponseDto {
            success: true,
            questions,
            total_questions,
            categories,
        })
    }

    /// Case-insensitive substring search over the question text.
    ///
    /// No match at all is NotFound; a page past the last match is an empty page.
    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionSearchResponseDto> {
        let selection = self.questions.search(term).await?;
        if selection.is_empty() {
            return Err(AppError::NotFound(format!(
                "No question matches '{}'",
                term
            )));
        }

        let questions = page_of(selection, page);
        let total_questions = self.questions.count().await?;

        Ok(QuestionSearchResponseDto {
            success: true,
            questions,
            total_questions,
        })
    }

    /// Validate and insert a new question, then return the requested page of the bank.
    pub async fn create(
        &self,
        dto: QuestionsPostDto,
        page: i64,
    ) -> Result<QuestionCreatedResponseDto> {
        let new_question = to_new_question(dto)?;

        let created = self
            .questions
            .insert(new_question)
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to insert question: {}", e)))?;

        tracing::info!(
            "Question created: id={}, category={}",
            created.id,
            created.category
        );

        let refreshed = async {
            let selection = self.questions.list_all().await?;
            let total_questions = self.questions.count().await?;
            Ok::<_, AppError>((selection, total_questions))
        };
        let (selection, total_questions) = refreshed.await.map_err(|e| {
            AppError::Unprocessable(format!("Failed to reload questions after insert: {}", e))
        })?;

        Ok(QuestionCreatedResponseDto {
            success: true,
            created: created.id,
            question_created: created.question,
            questions: page_of(selection, page),
            total_questions,
        })
    }

    /// Delete a question. A missing id is NotFound; a failing delete is Unprocessable.
    pub async fn delete(&self, id: i32) -> Result<QuestionDeletedResponseDto> {
        let existing = self
            .questions
            .find_by_id(id)
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to look up question: {}", e)))?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        let deleted = self
            .questions
            .delete(id)
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to delete question: {}", e)))?;

        // Removed by a concurrent request between lookup and delete
        if !deleted {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);

        Ok(QuestionDeletedResponseDto {
            success: true,
            deleted: id,
        })
    }

    /// One page of the questions in a category.
    ///
    /// An unknown category is BadRequest; an empty page is returned as is.
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: i64,
    ) -> Result<CategoryQuestionsResponseDto> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Unknown category {}", category_id)))?;

        let selection = self.questions.list_by_category(category.id).await?;
        let total_questions = self.questions.count().await?;

        Ok(CategoryQuestionsResponseDto {
            success: true,
            questions: page_of(selection, page),
            total_questions,
            current_category: category.category_type,
        })
    }
}

fn page_of(selection: Vec<Question>, page: i64) -> Vec<QuestionDto> {
    paginate(selection, page)
        .into_iter()
        .map(QuestionDto::from)
        .collect()
}

/// Required-field and integer checks for a create request, all answered with 422
fn to_new_question(dto: QuestionsPostDto) -> Result<NewQuestion> {
    dto.validate()
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let category = dto
        .category
        .as_ref()
        .and_then(|c| c.to_i32())
        .ok_or_else(|| AppError::Unprocessable("category must be an integer".to_string()))?;
    let difficulty = dto
        .difficulty
        .as_ref()
        .and_then(|d| d.to_i32())
        .ok_or_else(|| AppError::Unprocessable("difficulty must be an integer".to_string()))?;

    let question = dto
        .question
        .and_then(|q| q.into_text())
        .ok_or_else(|| AppError::Unprocessable("question must be a string".to_string()))?;
    let answer = dto
        .answer
        .and_then(|a| a.into_text())
        .ok_or_else(|| AppError::Unprocessable("answer must be a string".to_string()))?;

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}
