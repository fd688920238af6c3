use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::Result;
use crate::features::questions::models::Question;
use crate::features::questions::repositories::QuestionRepository;
use crate::features::quizzes::dtos::QuizRequest;
use crate::shared::constants::ALL_CATEGORIES_ID;

/// Service for quiz play
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Next unseen question for the requested category, or `None` once the
    /// category has been played through.
    pub async fn next_question(&self, request: &QuizRequest) -> Result<Option<Question>> {
        let candidates = if request.category_id == ALL_CATEGORIES_ID {
            self.questions.list_all().await?
        } else {
            self.questions.list_by_category(request.category_id).await?
        };

        let total = candidates.len();
        let picked = pick_unseen(candidates, &request.previous_questions, &mut rand::thread_rng());

        tracing::debug!(
            "Quiz draw: category={}, candidates={}, previous={}, picked={:?}",
            request.category_id,
            total,
            request.previous_questions.len(),
            picked.as_ref().map(|q| q.id)
        );

        Ok(picked)
    }
}

/// Choose uniformly among the candidates whose id is not in `previous`.
///
/// Duplicate or unknown ids in `previous` have no effect.
pub fn pick_unseen<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&i64::from(q.id)))
        .collect();

    unseen.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        random_question, seeded_questions, InMemoryQuestionRepository,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(previous: Vec<i64>, category_id: i32) -> QuizRequest {
        QuizRequest {
            previous_questions: previous,
            category_id,
        }
    }

    #[test]
    fn test_pick_unseen_never_returns_previous() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous = vec![1, 2, 3, 5, 8, 13];

        for _ in 0..200 {
            let picked = pick_unseen(seeded_questions(), &previous, &mut rng).unwrap();
            assert!(!previous.contains(&i64::from(picked.id)));
        }
    }

    #[test]
    fn test_pick_unseen_single_remaining() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous: Vec<i64> = (1..=18).collect();

        let picked = pick_unseen(seeded_questions(), &previous, &mut rng).unwrap();
        assert_eq!(picked.id, 19);
    }

    #[test]
    fn test_pick_unseen_exhausted() {
        let mut rng = StdRng::seed_from_u64(3);
        let previous: Vec<i64> = (1..=19).collect();

        assert!(pick_unseen(seeded_questions(), &previous, &mut rng).is_none());
        assert!(pick_unseen(vec![], &[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_unseen_ignores_duplicates_and_foreign_ids() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool: Vec<Question> = seeded_questions()
            .into_iter()
            .filter(|q| q.category == 1)
            .collect();
        // As long as the pool, but question 3 is still unseen
        let previous = vec![1, 1, 2];

        let picked = pick_unseen(pool, &previous, &mut rng).unwrap();
        assert_eq!(picked.id, 3);
    }

    #[test]
    fn test_pick_unseen_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut drawn = HashSet::new();

        for _ in 0..500 {
            let picked = pick_unseen(seeded_questions(), &[], &mut rng).unwrap();
            drawn.insert(picked.id);
        }
        assert_eq!(drawn.len(), 19);
    }

    #[tokio::test]
    async fn test_next_question_respects_category() {
        let repo = Arc::new(InMemoryQuestionRepository::new(seeded_questions()));
        for _ in 0..3 {
            repo.insert(random_question(6)).await.unwrap();
        }
        let service = QuizService::new(repo);

        for _ in 0..50 {
            let question = service
                .next_question(&request(vec![16], 6))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(question.category, 6);
            assert_ne!(question.id, 16);
        }
    }

    #[tokio::test]
    async fn test_next_question_all_categories() {
        let service = QuizService::new(Arc::new(InMemoryQuestionRepository::new(
            seeded_questions(),
        )));

        let question = service
            .next_question(&request(vec![], ALL_CATEGORIES_ID))
            .await
            .unwrap();
        assert!(question.is_some());
    }

    #[tokio::test]
    async fn test_next_question_played_through() {
        let service = QuizService::new(Arc::new(InMemoryQuestionRepository::new(
            seeded_questions(),
        )));

        let question = service
            .next_question(&request(vec![1, 2, 3], 1))
            .await
            .unwrap();
        assert!(question.is_none());
    }

    #[tokio::test]
    async fn test_next_question_unknown_category_is_exhausted() {
        let service = QuizService::new(Arc::new(InMemoryQuestionRepository::new(
            seeded_questions(),
        )));

        let question = service.next_question(&request(vec![], 77)).await.unwrap();
        assert!(question.is_none());
    }
}
