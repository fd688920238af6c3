//! In-memory repositories and seed data for service and router tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::repositories::QuestionRepository;

pub fn sample_categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| Category {
            id: i as i32 + 1,
            category_type: label.to_string(),
        })
        .collect()
}

/// Nineteen questions with ids 1..=19; category 1 (Science) holds three of them.
pub fn seeded_questions() -> Vec<Question> {
    let rows: [(&str, &str, i32, i32); 19] = [
        ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
        ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
        ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
        ("What was the name of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        ("How many players are on the field for one team in a standard game of ice hockey?", "Six", 6, 2),
        ("In which year was the first modern Olympic Games held?", "1896", 6, 3),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (question, answer, category, difficulty))| Question {
            id: i as i32 + 1,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .collect()
}

/// A question with generated text, for tests where only the category matters
pub fn random_question(category: i32) -> NewQuestion {
    NewQuestion {
        question: format!("{}?", Sentence(4..9).fake::<String>()),
        answer: Word().fake(),
        category,
        difficulty: (1..=5).fake(),
    }
}

/// Question repository backed by a vector, with switchable write failures
pub struct InMemoryQuestionRepository {
    rows: Mutex<Vec<Question>>,
    fail_writes: AtomicBool,
}

impl InMemoryQuestionRepository {
    pub fn new(rows: Vec<Question>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent insert, update and delete fail like a store error
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn select(&self, filter: impl Fn(&Question) -> bool) -> Vec<Question> {
        let mut rows: Vec<Question> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| filter(q))
            .cloned()
            .collect();
        rows.sort_by_key(|q| q.id);
        rows
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.select(|_| true))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>> {
        Ok(self.select(|q| q.id == id).into_iter().next())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self.select(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn list_by_category(&self, category: i32) -> Result<Vec<Question>> {
        Ok(self.select(|q| q.category == category))
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let stored = Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, question: &Question) -> Result<Option<Question>> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|q| q.id == question.id).map(|row| {
            *row = question.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|q| q.id != id);
        Ok(rows.len() < before)
    }
}

/// Category repository backed by a fixed vector
pub struct InMemoryCategoryRepository {
    rows: Vec<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new(rows: Vec<Category>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|c| c.id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        Ok(self.rows.iter().find(|c| c.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let questions = seeded_questions();
        assert_eq!(questions.len(), 19);
        assert!(questions.iter().filter(|q| q.category == 1).count() >= 3);
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id() {
        let repo = InMemoryQuestionRepository::new(seeded_questions());
        let stored = repo.insert(random_question(2)).await.unwrap();
        assert_eq!(stored.id, 20);
        assert_eq!(stored.category, 2);
        assert!((1..=5).contains(&stored.difficulty));
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let repo = InMemoryQuestionRepository::new(seeded_questions());
        let mut question = repo.find_by_id(2).await.unwrap().unwrap();
        question.difficulty = 5;

        let updated = repo.update(&question).await.unwrap().unwrap();
        assert_eq!(updated.difficulty, 5);
        assert_eq!(repo.find_by_id(2).await.unwrap().unwrap().difficulty, 5);

        question.id = 999;
        assert!(repo.update(&question).await.unwrap().is_none());
    }
}
