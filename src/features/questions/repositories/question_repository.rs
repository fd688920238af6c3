use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question};

/// Storage primitives for the question bank.
///
/// Every list is ordered by id so that pages are stable between requests
/// as long as the table does not change.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Question>>;

    async fn count(&self) -> Result<i64>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>>;

    /// Case-insensitive substring match on the question text
    async fn search(&self, term: &str) -> Result<Vec<Question>>;

    async fn list_by_category(&self, category: i32) -> Result<Vec<Question>>;

    async fn insert(&self, question: NewQuestion) -> Result<Question>;

    /// Not exposed through any route.
    #[allow(dead_code)]
    async fn update(&self, question: &Question) -> Result<Option<Question>>;

    /// Returns `false` if no row had the given id
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Escape LIKE wildcards so the term matches literally
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Postgres-backed question repository
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get question {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_by_category(&self, category: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions for category {}: {:?}", category, e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, question: &Question) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET question = $2, answer = $3, category = $4, difficulty = $5
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update question {}: {:?}", question.id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
